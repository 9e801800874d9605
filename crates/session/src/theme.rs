//! Display theme, shared explicitly with the components that render it.

use std::cell::Cell;
use std::rc::Rc;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

/// Shared handle to the current theme.
///
/// Clones observe the same value, so a storage-change style notification
/// applied through one handle is seen by every display component holding
/// another. The catalog pipeline and the estimate never receive it.
#[derive(Debug, Clone, Default)]
pub struct ThemeContext {
    current: Rc<Cell<Theme>>,
}

impl ThemeContext {
    pub fn new(theme: Theme) -> Self {
        Self {
            current: Rc::new(Cell::new(theme)),
        }
    }

    pub fn get(&self) -> Theme {
        self.current.get()
    }

    pub fn set(&self, theme: Theme) {
        self.current.set(theme);
    }

    pub fn is_dark(&self) -> bool {
        self.get() == Theme::Dark
    }

    pub fn set_dark_mode(&self, enabled: bool) {
        self.set(if enabled { Theme::Dark } else { Theme::Light });
    }
}
