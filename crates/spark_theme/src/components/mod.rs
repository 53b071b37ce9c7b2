//! Built-in component token trees

mod button;
mod tooltip;

pub use button::button_tokens;
pub use tooltip::tooltip_tokens;

use crate::error::ThemeError;
use crate::theme::ThemeBundle;
use crate::tree::TokenTree;
use std::fmt::{Display, Formatter};
use std::str::FromStr;

/// Built-in component catalog.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Component {
    Button,
    Tooltip,
}

impl Component {
    /// Stable id used on the command line and in token tree names.
    pub fn id(self) -> &'static str {
        match self {
            Self::Button => "button",
            Self::Tooltip => "tooltip",
        }
    }

    /// Full component list.
    pub fn all() -> &'static [Component] {
        const COMPONENTS: [Component; 2] = [Component::Button, Component::Tooltip];
        &COMPONENTS
    }

    /// Token tree for this component built from `bundle`.
    pub fn tokens(self, bundle: &ThemeBundle) -> TokenTree {
        match self {
            Self::Button => button_tokens(bundle),
            Self::Tooltip => tooltip_tokens(bundle),
        }
    }
}

impl Display for Component {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.id())
    }
}

impl FromStr for Component {
    type Err = ThemeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::all()
            .iter()
            .copied()
            .find(|component| component.id().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| ThemeError::UnknownComponent(s.to_string()))
    }
}

/// Look up a component by id and build its token tree.
pub fn component_tokens(name: &str, bundle: &ThemeBundle) -> crate::Result<TokenTree> {
    Ok(name.parse::<Component>()?.tokens(bundle))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::themes::SparkTheme;

    #[test]
    fn test_lookup() {
        assert_eq!("Button".parse::<Component>().unwrap(), Component::Button);
        assert!(matches!(
            component_tokens("slider", &SparkTheme::bundle()),
            Err(ThemeError::UnknownComponent(ref name)) if name == "slider"
        ));
    }

    #[test]
    fn test_tree_names_match_ids() {
        let bundle = SparkTheme::bundle();
        for component in Component::all() {
            assert_eq!(component.tokens(&bundle).name(), component.id());
        }
    }
}
