use std::rc::Rc;
use yew::prelude::*;

/// Which single panel of a disclosure group is expanded, if any.
#[derive(Clone, Debug, PartialEq)]
pub struct Accordion<K> {
    open: Option<K>,
}

impl<K> Default for Accordion<K> {
    fn default() -> Self {
        Self { open: None }
    }
}

impl<K: PartialEq> Accordion<K> {
    pub fn open(&self) -> Option<&K> {
        self.open.as_ref()
    }

    pub fn is_open(&self, key: &K) -> bool {
        self.open.as_ref() == Some(key)
    }

    /// Clicking the open panel closes it, any other panel replaces it.
    pub fn toggle(&mut self, key: K) {
        if self.is_open(&key) {
            self.open = None;
        } else {
            self.open = Some(key);
        }
    }
}

pub enum AccordionAction<K> {
    Toggle(K),
}

impl<K: Clone + PartialEq> Reducible for Accordion<K> {
    type Action = AccordionAction<K>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        match action {
            AccordionAction::Toggle(key) => next.toggle(key),
        }
        next.into()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_closed() {
        let accordion = Accordion::<&str>::default();
        assert_eq!(accordion.open(), None);
        assert!(!accordion.is_open(&"01"));
    }

    #[test]
    fn toggling_the_open_panel_closes_it() {
        let mut accordion = Accordion::default();
        accordion.toggle("02");
        assert!(accordion.is_open(&"02"));
        accordion.toggle("02");
        assert_eq!(accordion.open(), None);
    }

    #[test]
    fn another_panel_replaces_the_selection() {
        let mut accordion = Accordion::default();
        accordion.toggle("01");
        accordion.toggle("03");
        assert!(!accordion.is_open(&"01"));
        assert!(accordion.is_open(&"03"));
    }

    #[test]
    fn never_more_than_one_open() {
        let keys = ["01", "02", "03"];
        // All click sequences of length five over three panels.
        for n in 0..3usize.pow(5) {
            let mut accordion = Accordion::default();
            let mut expected: Option<&str> = None;
            let mut rest = n;
            for _ in 0..5 {
                let key = keys[rest % 3];
                rest /= 3;
                expected = if expected == Some(key) { None } else { Some(key) };
                accordion.toggle(key);

                let open_count = keys.iter().filter(|k| accordion.is_open(*k)).count();
                assert!(open_count <= 1);
                assert_eq!(accordion.open().copied(), expected);
            }
        }
    }

    #[test]
    fn reducer_applies_actions() {
        let state = Rc::new(Accordion::<String>::default());
        let state = state.reduce(AccordionAction::Toggle("01".to_string()));
        assert!(state.is_open(&"01".to_string()));
        let state = state.reduce(AccordionAction::Toggle("02".to_string()));
        assert!(state.is_open(&"02".to_string()));
        let state = state.reduce(AccordionAction::Toggle("02".to_string()));
        assert_eq!(state.open(), None);
    }
}
