use serde::{Deserialize, Serialize};

/// One modifier name or several, so both `"Alt"` and `["Alt", "Shift"]` read naturally in config
/// files.
#[derive(Serialize, Deserialize, Debug, Clone, Hash, Eq, PartialEq)]
#[serde(untagged)]
pub enum Modifier {
    Single(String),
    List(Vec<String>),
}

impl Modifier {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        match self {
            Modifier::Single(single) => single.is_empty(),
            Modifier::List(list) => list.is_empty(),
        }
    }
}

impl std::convert::From<Modifier> for Vec<String> {
    fn from(m: Modifier) -> Self {
        match m {
            Modifier::Single(modifier) => vec![modifier],
            Modifier::List(modifiers) => modifiers,
        }
    }
}

impl IntoIterator for &Modifier {
    type Item = String;
    type IntoIter = std::vec::IntoIter<Self::Item>;

    fn into_iter(self) -> Self::IntoIter {
        Vec::from(self.clone()).into_iter()
    }
}

impl std::convert::From<Vec<String>> for Modifier {
    fn from(l: Vec<String>) -> Self {
        Self::List(l)
    }
}

impl std::convert::From<&str> for Modifier {
    fn from(m: &str) -> Self {
        Self::Single(m.to_owned())
    }
}

impl std::fmt::Display for Modifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Single(modifier) => write!(f, "{modifier}"),
            Self::List(modifiers) => write!(f, "{}", modifiers.join("+")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lists_should_display_joined_with_plus() {
        let modifier = Modifier::from(vec!["Alt".to_owned(), "Shift".to_owned()]);
        assert_eq!(modifier.to_string(), "Alt+Shift");
        assert_eq!(Modifier::from("Mod4").to_string(), "Mod4");
    }

    #[test]
    fn empty_lists_and_names_should_be_empty() {
        assert!(Modifier::from("").is_empty());
        assert!(Modifier::List(vec![]).is_empty());
        assert!(!Modifier::from("Alt").is_empty());
    }

    #[test]
    fn iterating_should_yield_every_name() {
        let modifier = Modifier::from(vec!["Alt".to_owned(), "Control".to_owned()]);
        let names: Vec<String> = (&modifier).into_iter().collect();
        assert_eq!(names, vec!["Alt".to_owned(), "Control".to_owned()]);
    }
}
