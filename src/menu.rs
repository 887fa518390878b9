//! Slide-out feed menu visibility.
use crate::presenter::Presenter;

/// Owns the menu's `hidden` flag. The menu starts hidden.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MenuController {
    hidden: bool,
}

impl Default for MenuController {
    fn default() -> Self {
        Self { hidden: true }
    }
}

impl MenuController {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_hidden(&self) -> bool {
        self.hidden
    }

    /// Flip visibility and return the new `hidden` value.
    pub fn toggle(&mut self, presenter: &mut dyn Presenter) -> bool {
        self.hidden = !self.hidden;
        presenter.set_menu_hidden(self.hidden);
        tracing::debug!(hidden = self.hidden, "Menu toggled");
        self.hidden
    }

    /// Close the menu (after a feed was picked from it).
    pub fn hide(&mut self, presenter: &mut dyn Presenter) {
        if !self.hidden {
            self.toggle(presenter);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::presenter::PageView;
    use proptest::prelude::*;

    #[test]
    fn test_menu_hidden_by_default() {
        let menu = MenuController::new();
        assert!(menu.is_hidden());
        assert!(PageView::default().menu_hidden);
    }

    #[test]
    fn test_toggle_shows_then_hides() {
        let mut menu = MenuController::new();
        let mut page = PageView::default();

        assert!(!menu.toggle(&mut page));
        assert!(!page.menu_hidden);

        assert!(menu.toggle(&mut page));
        assert!(page.menu_hidden);
    }

    #[test]
    fn test_hide_is_noop_when_hidden() {
        let mut menu = MenuController::new();
        let mut page = PageView::default();
        menu.hide(&mut page);
        assert!(menu.is_hidden());

        menu.toggle(&mut page);
        menu.hide(&mut page);
        assert!(menu.is_hidden());
        assert!(page.menu_hidden);
    }

    proptest! {
        #[test]
        fn prop_even_toggles_restore_state(pairs in 0usize..32) {
            let mut menu = MenuController::new();
            let mut page = PageView::default();
            for _ in 0..pairs * 2 {
                menu.toggle(&mut page);
            }
            prop_assert!(menu.is_hidden());
            prop_assert_eq!(page.menu_hidden, menu.is_hidden());
        }
    }
}
