//! Expand/collapse state for a single FAQ row.
//!
//! Every row owns one [`AccordionItemState`] through `use_reducer`, so rows
//! never observe each other. The only transitions are a user toggle and the
//! one-shot answer measurement taken after the first paint.

use std::rc::Rc;

use yew::Reducible;

use crate::config::ANSWER_PADDING_PX;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AccordionItemState {
    pub expanded: bool,
    /// Answer height plus padding, in pixels. `None` until measured, and
    /// stays `None` when the measurement found no layout.
    pub measured_height: Option<f64>,
    measured: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub enum AccordionAction {
    Toggle,
    /// Natural height of the answer paragraph, without padding.
    Measured(Option<f64>),
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum AnswerHeight {
    Zero,
    Unset,
    Px(f64),
}

impl AnswerHeight {
    pub fn to_style(self) -> String {
        match self {
            AnswerHeight::Zero => "height: 0;".to_string(),
            AnswerHeight::Unset => String::new(),
            AnswerHeight::Px(px) => format!("height: {}px;", px),
        }
    }
}

impl AccordionItemState {
    pub fn collapsed() -> Self {
        Self::default()
    }

    pub fn is_measured(&self) -> bool {
        self.measured
    }

    pub fn toggled(&self) -> Self {
        Self {
            expanded: !self.expanded,
            ..self.clone()
        }
    }

    /// Records the measurement. Only the first call has any effect.
    pub fn with_measurement(&self, natural_height: Option<f64>) -> Self {
        if self.measured {
            return self.clone();
        }
        Self {
            measured_height: natural_height.map(|h| h + ANSWER_PADDING_PX),
            measured: true,
            ..self.clone()
        }
    }

    pub fn answer_height(&self) -> AnswerHeight {
        if !self.expanded {
            return AnswerHeight::Zero;
        }
        match self.measured_height {
            Some(px) => AnswerHeight::Px(px),
            None => AnswerHeight::Unset,
        }
    }

    pub fn answer_class(&self) -> &'static str {
        if self.expanded { "show" } else { "hide" }
    }

    pub fn icon_rotation(&self) -> &'static str {
        if self.expanded { "rotate(45deg)" } else { "rotate(0)" }
    }
}

impl Reducible for AccordionItemState {
    type Action = AccordionAction;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        match action {
            AccordionAction::Toggle => Rc::new(self.toggled()),
            AccordionAction::Measured(height) => {
                if self.measured {
                    tracing::trace!("ignoring repeated answer measurement");
                    return self;
                }
                Rc::new(self.with_measurement(height))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::faqs::FAQS;

    fn reduce(state: AccordionItemState, action: AccordionAction) -> AccordionItemState {
        (*Rc::new(state).reduce(action)).clone()
    }

    #[test]
    fn starts_collapsed_and_unmeasured() {
        let state = AccordionItemState::collapsed();
        assert!(!state.expanded);
        assert_eq!(state.measured_height, None);
        assert!(!state.is_measured());
        assert_eq!(state.answer_height(), AnswerHeight::Zero);
        assert_eq!(state.answer_class(), "hide");
    }

    #[test]
    fn toggling_twice_restores_the_original_state() {
        let start = AccordionItemState::collapsed().with_measurement(Some(120.0));
        let once = reduce(start.clone(), AccordionAction::Toggle);
        assert!(once.expanded);
        let twice = reduce(once, AccordionAction::Toggle);
        assert_eq!(twice, start);
    }

    #[test]
    fn expanded_height_is_measurement_plus_padding() {
        let state = reduce(AccordionItemState::collapsed(), AccordionAction::Measured(Some(96.5)));
        assert_eq!(state.measured_height, Some(146.5));

        let open = reduce(state.clone(), AccordionAction::Toggle);
        assert_eq!(open.answer_height(), AnswerHeight::Px(146.5));
        assert_eq!(open.answer_height().to_style(), "height: 146.5px;");
        assert_eq!(open.answer_class(), "show");

        let closed = reduce(open, AccordionAction::Toggle);
        assert_eq!(closed.answer_height(), AnswerHeight::Zero);
        assert_eq!(closed.answer_height().to_style(), "height: 0;");
    }

    #[test]
    fn measurement_is_taken_only_once() {
        let first = reduce(AccordionItemState::collapsed(), AccordionAction::Measured(Some(80.0)));
        let second = reduce(first.clone(), AccordionAction::Measured(Some(400.0)));
        assert_eq!(second.measured_height, Some(130.0));
        assert_eq!(second, first);
    }

    #[test]
    fn missing_layout_leaves_height_unset() {
        let state = reduce(AccordionItemState::collapsed(), AccordionAction::Measured(None));
        assert!(state.is_measured());
        assert_eq!(state.measured_height, None);

        let open = reduce(state, AccordionAction::Toggle);
        assert_eq!(open.answer_height(), AnswerHeight::Unset);
        assert_eq!(open.answer_height().to_style(), "");
    }

    #[test]
    fn toggle_before_measurement_still_opens() {
        let open = reduce(AccordionItemState::collapsed(), AccordionAction::Toggle);
        assert!(open.expanded);
        let measured = reduce(open, AccordionAction::Measured(Some(10.0)));
        assert!(measured.expanded);
        assert_eq!(measured.answer_height(), AnswerHeight::Px(60.0));
    }

    #[test]
    fn icon_rotates_when_open() {
        let state = AccordionItemState::collapsed();
        assert_eq!(state.icon_rotation(), "rotate(0)");
        assert_eq!(state.toggled().icon_rotation(), "rotate(45deg)");
    }

    #[test]
    fn toggling_one_row_leaves_the_others_alone() {
        let mut rows: Vec<AccordionItemState> = FAQS
            .iter()
            .map(|_| AccordionItemState::collapsed())
            .collect();
        assert_eq!(rows.len(), 6);
        assert!(rows.iter().all(|row| !row.expanded));

        // Row 3 is "How much does Netflix cost?".
        assert_eq!(FAQS[2].question, "How much does Netflix cost?");
        rows[2] = reduce(rows[2].clone(), AccordionAction::Toggle);
        for (i, row) in rows.iter().enumerate() {
            assert_eq!(row.expanded, i == 2, "row {}", i + 1);
        }

        rows[2] = reduce(rows[2].clone(), AccordionAction::Toggle);
        assert!(rows.iter().all(|row| !row.expanded));
    }

    #[test]
    fn several_rows_may_be_open_at_once() {
        let mut rows = vec![AccordionItemState::collapsed(); 3];
        rows[0] = reduce(rows[0].clone(), AccordionAction::Toggle);
        rows[2] = reduce(rows[2].clone(), AccordionAction::Toggle);
        assert!(rows[0].expanded && rows[2].expanded);
        assert!(!rows[1].expanded);
    }
}
