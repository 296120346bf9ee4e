/// Application templates offered at the start of the wizard. Matches the
/// catalog exposed by the server's console.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Template {
    SinglePage,
    TraditionalWeb,
    Mobile,
    Standard,
    MachineToMachine,
}

impl Template {
    pub const ALL: [Template; 5] = [
        Template::SinglePage,
        Template::TraditionalWeb,
        Template::Mobile,
        Template::Standard,
        Template::MachineToMachine,
    ];

    pub fn title(&self) -> &'static str {
        match self {
            Template::SinglePage => "Single-Page Application",
            Template::TraditionalWeb => "Traditional Web Application",
            Template::Mobile => "Mobile Application",
            Template::Standard => "Standard-Based Application",
            Template::MachineToMachine => "M2M Application",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Template::SinglePage => {
                "A web application that runs application logic in the browser."
            }
            Template::TraditionalWeb => {
                "A web application that runs application logic on the server."
            }
            Template::Mobile => "Applications developed to target mobile devices.",
            Template::Standard => "Applications built using standard protocols.",
            Template::MachineToMachine => {
                "Applications tailored for Machine to Machine communication."
            }
        }
    }

    pub fn key(&self) -> &'static str {
        match self {
            Template::SinglePage => "single_page",
            Template::TraditionalWeb => "traditional",
            Template::Mobile => "mobile",
            Template::Standard => "standard",
            Template::MachineToMachine => "m2m",
        }
    }

    pub fn from_title(title: &str) -> Option<Template> {
        Template::ALL.into_iter().find(|t| t.title() == title)
    }

    /// Only the single-page flow is wired up end to end.
    pub fn is_supported(&self) -> bool {
        matches!(self, Template::SinglePage)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_titles_are_stable() {
        let titles: Vec<&str> = Template::ALL.iter().map(|t| t.title()).collect();
        assert_eq!(
            titles,
            vec![
                "Single-Page Application",
                "Traditional Web Application",
                "Mobile Application",
                "Standard-Based Application",
                "M2M Application",
            ]
        );
    }

    #[test]
    fn keys_are_unique() {
        let mut keys: Vec<&str> = Template::ALL.iter().map(|t| t.key()).collect();
        keys.sort_unstable();
        keys.dedup();
        assert_eq!(keys.len(), Template::ALL.len());
    }

    #[test]
    fn titles_round_trip_through_from_title() {
        for template in Template::ALL {
            assert_eq!(Template::from_title(template.title()), Some(template));
        }
        assert_eq!(Template::from_title("No Such Application"), None);
    }

    #[test]
    fn only_single_page_is_supported() {
        for template in Template::ALL {
            assert_eq!(
                template.is_supported(),
                template == Template::SinglePage,
                "{}",
                template.title()
            );
        }
    }
}
