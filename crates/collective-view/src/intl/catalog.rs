//! Message catalog
//!
//! Ids and English patterns for every message the components render.

pub mod ids {
    pub const TIER_DEFAULT_DESCRIPTION: &str = "TierCard.DefaultDescription";
    pub const TIER_AMOUNT_GOAL: &str = "TierPage.AmountGoal";
    pub const TIER_AMOUNT_RAISED: &str = "TierPage.AmountRaised";
    pub const TIER_STARTS_AT: &str = "ContributeTier.StartsAt";
    pub const READ_MORE: &str = "ContributeCard.ReadMore";
    pub const CONTRIBUTE_BUTTON: &str = "Contribute";
    pub const CONTRIBUTORS_SUMMARY: &str = "ContributeCard.Contributors";
    pub const TYPE_GOAL: &str = "ContributionType.Goal";
    pub const TYPE_RECURRING: &str = "ContributionType.Recurring";
    pub const TYPE_ONE_TIME: &str = "ContributionType.OneTime";
    pub const MONEY_SUFFIX: &str = "FormattedMoneyAmount.Suffix";

    pub const HOSTS_DEFAULT_TITLE: &str = "host.create.title";
    pub const HOSTS_FIND_OUT_MORE: &str = "hosts.description.findOutMoreLink";
    pub const HOSTS_DESCRIPTION: &str = "hosts.description";

    pub const WEBSITE: &str = "collective.website.label";
    pub const SETTINGS: &str = "collective.settings";
    pub const EDIT_COVER: &str = "Hero.EditCover";
    pub const EDIT_COLOR: &str = "Hero.EditColor";
    pub const HERO_HOST: &str = "Collective.Hero.Host";
    pub const HOST_TOS: &str = "host.tos";
    pub const HOST_FEE: &str = "Hero.HostFee";
    pub const TOTAL_CONTRIBUTED: &str = "Hero.TotalContributed";
    pub const TAG_OPEN_SOURCE: &str = "Tags.OpenSource";

    pub const TERM_FISCAL_HOST: &str = "DefinedTerm.FiscalHost";
    pub const TERM_FISCAL_HOST_DEFINITION: &str = "DefinedTerm.FiscalHost.Definition";
    pub const TERM_HOST_FEE: &str = "DefinedTerm.HostFee";
    pub const TERM_HOST_FEE_DEFINITION: &str = "DefinedTerm.HostFee.Definition";

    pub const CTA_CONTACT: &str = "CollectiveCallsToAction.Contact";
    pub const CTA_SUBMIT_EXPENSE: &str = "CollectiveCallsToAction.SubmitExpense";
    pub const CTA_APPLY: &str = "CollectiveCallsToAction.Apply";
    pub const CTA_DASHBOARD: &str = "CollectiveCallsToAction.Dashboard";

    pub const PAGE_LOAD_ERROR: &str = "Page.LoadError";
}

pub const DEFAULT_MESSAGES: &[(&str, &str)] = &[
    (
        ids::TIER_DEFAULT_DESCRIPTION,
        "{tierKind, select, backer {Become a {tierName}} sponsor {Become a {tierName}} other {Join us as {tierName}}} \
         {minAmount, select, 0 {} other {for {minAmountWithCurrency} {interval, select, month {per month} year {per year} other {}}}} \
         and help us sustain our activities!",
    ),
    (ids::TIER_AMOUNT_GOAL, "{amountWithInterval} goal"),
    (ids::TIER_AMOUNT_RAISED, "{amountWithInterval} raised"),
    (ids::TIER_STARTS_AT, "Starts at"),
    (ids::READ_MORE, "Read more"),
    (ids::CONTRIBUTE_BUTTON, "Contribute"),
    (
        ids::CONTRIBUTORS_SUMMARY,
        "{userCount, plural, =0 {} one {# individual} other {# individuals}} \
         {both, select, true {and} other {}} \
         {orgCount, plural, =0 {} one {# organization} other {# organizations}} \
         {totalCount, plural, one {has contributed} other {have contributed}}",
    ),
    (ids::TYPE_GOAL, "Goal"),
    (ids::TYPE_RECURRING, "Recurring contribution"),
    (ids::TYPE_ONE_TIME, "One time contribution"),
    (
        ids::MONEY_SUFFIX,
        "{currency}{interval, select, month { / month} year { / year} other {}}",
    ),
    (ids::HOSTS_DEFAULT_TITLE, "Become a host"),
    (
        ids::HOSTS_FIND_OUT_MORE,
        "Find out more about becoming an Open Collective Host.",
    ),
    (
        ids::HOSTS_DESCRIPTION,
        "Hosts are legal entities that collect money on behalf of open collectives so that they don't have to \
         worry about accounting, taxes, etc. Some also provide extra services. {findOutMoreLink}",
    ),
    (ids::WEBSITE, "Website"),
    (ids::SETTINGS, "Settings"),
    (ids::EDIT_COVER, "Edit cover"),
    (ids::EDIT_COLOR, "Edit main color"),
    (ids::HERO_HOST, "{FiscalHost}: {hostName}"),
    (ids::HOST_TOS, "Terms of fiscal sponsorship"),
    (ids::HOST_FEE, "Host fee: {fee}"),
    (ids::TOTAL_CONTRIBUTED, "{amount} contributed"),
    (ids::TAG_OPEN_SOURCE, "Open source"),
    (ids::TERM_FISCAL_HOST, "Fiscal Host"),
    (
        ids::TERM_FISCAL_HOST_DEFINITION,
        "A fiscal host is a legal entity that holds funds on behalf of collectives and takes care of accounting, \
         taxes and invoices.",
    ),
    (ids::TERM_HOST_FEE, "Host fee"),
    (
        ids::TERM_HOST_FEE_DEFINITION,
        "The percentage of each contribution the fiscal host keeps for its services.",
    ),
    (ids::CTA_CONTACT, "Contact"),
    (ids::CTA_SUBMIT_EXPENSE, "Submit Expense"),
    (ids::CTA_APPLY, "Apply"),
    (ids::CTA_DASHBOARD, "Dashboard"),
    (ids::PAGE_LOAD_ERROR, "This page could not be displayed."),
];
