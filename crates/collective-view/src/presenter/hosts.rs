//! Hosts Cover Presenter

use serde::Serialize;

use crate::config::LinkConfig;
use crate::intl::{ids, Intl, MessageArgs, MessagePart};

/// Slot name of the "find out more" link inside the description
pub const FIND_OUT_MORE_SLOT: &str = "findOutMoreLink";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HostsCoverView {
    pub title: String,
    /// Description text with a [`FIND_OUT_MORE_SLOT`] placeholder
    #[serde(skip)]
    pub description: Vec<MessagePart>,
    pub find_out_more_label: String,
    pub find_out_more_url: String,
}

pub fn present_hosts_cover(title: Option<&str>, intl: &Intl, links: &LinkConfig) -> HostsCoverView {
    let title = match title {
        Some(t) if !t.trim().is_empty() => t.to_string(),
        _ => intl.format_message(ids::HOSTS_DEFAULT_TITLE, &MessageArgs::new()),
    };

    HostsCoverView {
        title,
        description: intl.format_parts(ids::HOSTS_DESCRIPTION, &MessageArgs::new().slot(FIND_OUT_MORE_SLOT)),
        find_out_more_label: intl.format_message(ids::HOSTS_FIND_OUT_MORE, &MessageArgs::new()),
        find_out_more_url: links.become_host_docs.clone(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_title() {
        let view = present_hosts_cover(None, &Intl::en(), &LinkConfig::default());
        assert_eq!(view.title, "Become a host");
        let view = present_hosts_cover(Some("Hosts"), &Intl::en(), &LinkConfig::default());
        assert_eq!(view.title, "Hosts");
    }

    #[test]
    fn test_description_ends_with_link_slot() {
        let view = present_hosts_cover(None, &Intl::en(), &LinkConfig::default());
        assert_eq!(view.description.len(), 2);
        match &view.description[0] {
            MessagePart::Text(text) => {
                assert!(text.starts_with("Hosts are legal entities"));
                assert!(text.contains("don't have to worry"));
            }
            other => panic!("expected text, got {:?}", other),
        }
        assert_eq!(view.description[1], MessagePart::Placeholder(FIND_OUT_MORE_SLOT.to_string()));
        assert_eq!(view.find_out_more_url, "https://docs.opencollective.com/help/hosts/become-host");
    }
}
