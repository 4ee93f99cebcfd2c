//! Search and facet filtering over the fetched fund list

use super::fund::FundRecord;
use std::collections::BTreeSet;
use std::fmt::Display;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Ord, PartialOrd)]
pub enum Facet {
    Shariah,
    RiskProfile,
    FundType,
}

impl Facet {
    pub const ALL: [Facet; 3] = [Facet::Shariah, Facet::RiskProfile, Facet::FundType];

    /// Fixed option vocabulary offered for this facet.
    pub fn options(&self) -> &'static [&'static str] {
        match self {
            Facet::Shariah => &["Islamic", "Conventional"],
            Facet::RiskProfile => &["Low", "Medium", "High"],
            Facet::FundType => &["Mutual Fund", "Pension Fund"],
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            Facet::Shariah => "Shariah Compliance",
            Facet::RiskProfile => "Risk Profile",
            Facet::FundType => "Fund Type",
        }
    }

    /// The field of `fund` this facet selects on.
    pub fn value_of<'a>(&self, fund: &'a FundRecord) -> &'a str {
        match self {
            Facet::Shariah => &fund.shariah,
            Facet::RiskProfile => &fund.risk_profile,
            Facet::FundType => &fund.fund_type,
        }
    }
}

impl Display for Facet {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            match self {
                Facet::Shariah => "shariah",
                Facet::RiskProfile => "risk",
                Facet::FundType => "fund-type",
            }
        )
    }
}

impl FromStr for Facet {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "shariah" => Ok(Facet::Shariah),
            "risk" | "riskprofile" | "risk-profile" => Ok(Facet::RiskProfile),
            "type" | "fundtype" | "fund-type" => Ok(Facet::FundType),
            _ => Err(anyhow::anyhow!("Invalid facet: {}", s)),
        }
    }
}

/// Selected options per facet. Within a facet options are ORed; across facets ANDed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    pub shariah: BTreeSet<String>,
    pub risk_profile: BTreeSet<String>,
    pub fund_type: BTreeSet<String>,
}

impl FilterSelection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn selected(&self, facet: Facet) -> &BTreeSet<String> {
        match facet {
            Facet::Shariah => &self.shariah,
            Facet::RiskProfile => &self.risk_profile,
            Facet::FundType => &self.fund_type,
        }
    }

    fn selected_mut(&mut self, facet: Facet) -> &mut BTreeSet<String> {
        match facet {
            Facet::Shariah => &mut self.shariah,
            Facet::RiskProfile => &mut self.risk_profile,
            Facet::FundType => &mut self.fund_type,
        }
    }

    /// Removes `option` if selected, otherwise adds it. Options are not checked against
    /// the facet vocabulary.
    pub fn toggle(&mut self, facet: Facet, option: &str) {
        let set = self.selected_mut(facet);
        if !set.remove(option) {
            set.insert(option.to_string());
        }
    }

    pub fn clear(&mut self) {
        self.shariah.clear();
        self.risk_profile.clear();
        self.fund_type.clear();
    }

    /// Whether any facet has a selection ("Clear all" is offered only then).
    pub fn is_active(&self) -> bool {
        Facet::ALL.iter().any(|f| !self.selected(*f).is_empty())
    }

    pub fn matches(&self, fund: &FundRecord) -> bool {
        Facet::ALL.iter().all(|facet| {
            let set = self.selected(*facet);
            set.is_empty() || set.contains(facet.value_of(fund))
        })
    }
}

/// Normalized free-text search, matched against name, manager and category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchQuery {
    term: String,
}

impl SearchQuery {
    pub fn new(text: &str) -> Self {
        Self {
            term: text.trim().to_lowercase(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.term.is_empty()
    }

    pub fn matches(&self, fund: &FundRecord) -> bool {
        self.is_empty()
            || [&fund.fund_name, &fund.manager, &fund.category]
                .iter()
                .any(|field| field.to_lowercase().contains(&self.term))
    }
}

/// Returns the funds matching both the search and the facet selection, in input order.
pub fn filter_funds<'a>(
    funds: &'a [FundRecord],
    search: &SearchQuery,
    selection: &FilterSelection,
) -> Vec<&'a FundRecord> {
    funds
        .iter()
        .filter(|fund| search.matches(fund) && selection.matches(fund))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::fund::tests::fund;

    fn two_funds() -> Vec<FundRecord> {
        vec![
            fund(1, "Meezan Islamic Fund", "Al Meezan", "Equity")
                .with_facets("Islamic", "High", "Mutual Fund"),
            fund(2, "HBL Growth Fund", "HBL AMC", "Balanced"),
        ]
    }

    fn catalogue() -> Vec<FundRecord> {
        vec![
            fund(1, "Meezan Islamic Fund", "Al Meezan", "Equity")
                .with_facets("Islamic", "High", "Mutual Fund"),
            fund(2, "HBL Growth Fund", "HBL AMC", "Balanced"),
            fund(3, "Meezan Pension Plan", "Al Meezan", "Income")
                .with_facets("Islamic", "Low", "Pension Fund"),
            fund(4, "UBL Money Market", "UBL Funds", "Money Market")
                .with_facets("Conventional", "Low", "Mutual Fund"),
            fund(5, "NBP Islamic Savings", "NBP Funds", "Islamic Income")
                .with_facets("Islamic", "Medium", "Mutual Fund"),
            fund(6, "ABL Pension Growth", "ABL AMC", "Equity")
                .with_facets("Conventional", "High", "Pension Fund"),
        ]
    }

    fn ids(funds: &[&FundRecord]) -> Vec<i64> {
        funds.iter().map(|f| f.id).collect()
    }

    fn matching(funds: &[FundRecord], search: &str, selection: &FilterSelection) -> Vec<i64> {
        ids(&filter_funds(funds, &SearchQuery::new(search), selection))
    }

    fn select(pairs: &[(Facet, &str)]) -> FilterSelection {
        let mut selection = FilterSelection::new();
        for (facet, option) in pairs {
            selection.toggle(*facet, option);
        }
        selection
    }

    #[test]
    fn test_unfiltered_is_identity() {
        let funds = catalogue();
        let none = FilterSelection::new();
        assert_eq!(matching(&funds, "", &none), vec![1, 2, 3, 4, 5, 6]);
        assert_eq!(matching(&funds, "   ", &none).len(), funds.len());
    }

    #[test]
    fn test_result_preserves_input_order() {
        let funds = catalogue();
        let selection = select(&[(Facet::RiskProfile, "Low"), (Facet::RiskProfile, "High")]);
        assert_eq!(matching(&funds, "", &selection), vec![1, 3, 4, 6]);
    }

    #[test]
    fn test_filtering_is_idempotent() {
        let funds = catalogue();
        let search = SearchQuery::new("fund");
        let selection = select(&[(Facet::Shariah, "Conventional")]);

        let once: Vec<FundRecord> = filter_funds(&funds, &search, &selection)
            .into_iter()
            .cloned()
            .collect();
        let twice = filter_funds(&once, &search, &selection);
        assert_eq!(ids(&twice), once.iter().map(|f| f.id).collect::<Vec<_>>());
    }

    #[test]
    fn test_adding_option_never_shrinks_facet() {
        let funds = catalogue();
        for facet in Facet::ALL {
            let mut selection = FilterSelection::new();
            let mut previous: Vec<i64> = Vec::new();
            for option in facet.options() {
                selection.toggle(facet, option);
                let current = matching(&funds, "", &selection);
                assert!(previous.iter().all(|id| current.contains(id)));
                previous = current;
            }
        }
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let funds = catalogue();
        let none = FilterSelection::new();
        let upper = matching(&funds, "ISLAMIC fund", &none);
        assert_eq!(upper, matching(&funds, "islamic fund", &none));
        assert_eq!(upper, vec![1]);
    }

    #[test]
    fn test_search_matches_name_manager_and_category() {
        let funds = catalogue();
        let none = FilterSelection::new();
        assert_eq!(matching(&funds, "growth", &none), vec![2, 6]);
        assert_eq!(matching(&funds, "ubl funds", &none), vec![4]);
        assert_eq!(matching(&funds, "money market", &none), vec![4]);
        assert!(matching(&funds, "High", &none).is_empty());
    }

    #[test]
    fn test_search_term_is_trimmed() {
        let funds = catalogue();
        let none = FilterSelection::new();
        assert_eq!(matching(&funds, "  meezan  ", &none), vec![1, 3]);
    }

    #[test]
    fn test_search_by_name() {
        let funds = two_funds();
        assert_eq!(matching(&funds, "meezan", &FilterSelection::new()), vec![1]);
    }

    #[test]
    fn test_shariah_facet_only() {
        let funds = two_funds();
        let selection = select(&[(Facet::Shariah, "Islamic")]);
        let result = filter_funds(&funds, &SearchQuery::new(""), &selection);
        assert!(result.iter().all(|f| f.shariah == "Islamic"));
        assert_eq!(ids(&result), vec![1]);
    }

    #[test]
    fn test_facets_are_anded() {
        let record = fund(9, "X", "Y", "Z").with_facets("Islamic", "Low", "Mutual Fund");
        let funds = vec![record];
        let selection = select(&[(Facet::Shariah, "Islamic"), (Facet::RiskProfile, "High")]);
        assert!(matching(&funds, "", &selection).is_empty());
    }

    #[test]
    fn test_clear_restores_search_only_result() {
        let funds = catalogue();
        let mut selection = select(&[
            (Facet::Shariah, "Conventional"),
            (Facet::RiskProfile, "Medium"),
            (Facet::FundType, "Pension Fund"),
        ]);
        assert!(matching(&funds, "meezan", &selection).is_empty());

        selection.clear();
        assert!(!selection.is_active());
        assert_eq!(matching(&funds, "meezan", &selection), vec![1, 3]);
    }

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut selection = FilterSelection::new();
        selection.toggle(Facet::FundType, "Pension Fund");
        assert!(selection.fund_type.contains("Pension Fund"));
        assert!(selection.is_active());

        selection.toggle(Facet::FundType, "Pension Fund");
        assert!(selection.fund_type.is_empty());
        assert!(!selection.is_active());
    }

    #[test]
    fn test_toggle_accepts_unknown_option() {
        let funds = catalogue();
        let selection = select(&[(Facet::RiskProfile, "Extreme")]);
        assert!(selection.risk_profile.contains("Extreme"));
        assert!(matching(&funds, "", &selection).is_empty());
    }

    #[test]
    fn test_facet_from_str() {
        assert_eq!("shariah".parse::<Facet>().unwrap(), Facet::Shariah);
        assert_eq!("riskProfile".parse::<Facet>().unwrap(), Facet::RiskProfile);
        assert_eq!("RISK".parse::<Facet>().unwrap(), Facet::RiskProfile);
        assert_eq!("fund-type".parse::<Facet>().unwrap(), Facet::FundType);
        assert_eq!("fundType".parse::<Facet>().unwrap(), Facet::FundType);
        assert!("colour".parse::<Facet>().is_err());
        for facet in Facet::ALL {
            assert_eq!(facet.to_string().parse::<Facet>().unwrap(), facet);
        }
    }
}
