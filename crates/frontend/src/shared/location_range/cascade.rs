use contracts::shared::location_range::{
    axis_query_variables, AxisSelection, LocationAxis, LocationRange, Side, WILDCARD,
};
use serde_json::Value;
use std::cmp::Ordering;

/// State of one axis on one side
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum AxisState {
    /// No options known. `error` holds the message of a failed fetch.
    Unselected { error: Option<String> },
    /// Waiting for the fetch issued with `generation`
    Loading { generation: u64 },
    Ready {
        options: Vec<String>,
        selected: Option<String>,
    },
    /// Any value. `options` are kept to restore a concrete default.
    Wildcard { options: Vec<String> },
}

impl AxisState {
    pub const UNSELECTED: AxisState = AxisState::Unselected { error: None };

    /// Concrete value, or `*` for a wildcard
    pub fn selected(&self) -> Option<&str> {
        match self {
            AxisState::Ready { selected, .. } => selected.as_deref(),
            AxisState::Wildcard { .. } => Some(WILDCARD),
            _ => None,
        }
    }

    pub fn options(&self) -> &[String] {
        match self {
            AxisState::Ready { options, .. } | AxisState::Wildcard { options } => options,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self, AxisState::Loading { .. })
    }

    pub fn is_wildcard(&self) -> bool {
        matches!(self, AxisState::Wildcard { .. })
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            AxisState::Unselected { error } => error.as_deref(),
            _ => None,
        }
    }
}

/// Identity of an option fetch. A response is applied only while the axis is
/// still waiting for this exact generation.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct RequestToken {
    pub side: Side,
    pub axis: LocationAxis,
    pub generation: u64,
}

/// Distinct values of one axis to fetch, constrained by the coarser selections
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct OptionFetch {
    pub token: RequestToken,
    pub block_id: String,
    pub fixed: Vec<(LocationAxis, String)>,
}

impl OptionFetch {
    pub fn variables(&self) -> Value {
        let fixed: Vec<(LocationAxis, &str)> =
            self.fixed.iter().map(|(a, v)| (*a, v.as_str())).collect();
        axis_query_variables(&self.block_id, self.token.axis, &fixed)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CascadeEvent {
    SelectBlock(Option<String>),
    Select {
        side: Side,
        axis: LocationAxis,
        value: String,
    },
    SelectWildcard {
        side: Side,
        axis: LocationAxis,
    },
    ClearWildcard {
        side: Side,
        axis: LocationAxis,
    },
    /// Blank entry picked: drops a concrete value, clears a wildcard
    Deselect {
        side: Side,
        axis: LocationAxis,
    },
    OptionsLoaded {
        token: RequestToken,
        options: Vec<String>,
    },
    OptionsFailed {
        token: RequestToken,
        message: String,
    },
}

/// Result of applying one event
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Transition {
    pub state: LocationCascade,
    pub fetches: Vec<OptionFetch>,
}

/// Block plus four axes on each of the origin and destination sides
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct LocationCascade {
    block_id: Option<String>,
    axes: [[AxisState; 4]; 2],
    next_generation: u64,
}

impl Default for LocationCascade {
    fn default() -> Self {
        Self {
            block_id: None,
            axes: std::array::from_fn(|_| std::array::from_fn(|_| AxisState::UNSELECTED)),
            next_generation: 1,
        }
    }
}

fn side_index(side: Side) -> usize {
    match side {
        Side::Origin => 0,
        Side::Destination => 1,
    }
}

impl LocationCascade {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn block_id(&self) -> Option<&str> {
        self.block_id.as_deref()
    }

    pub fn axis(&self, side: Side, axis: LocationAxis) -> &AxisState {
        &self.axes[side_index(side)][axis.index()]
    }

    fn axis_mut(&mut self, side: Side, axis: LocationAxis) -> &mut AxisState {
        &mut self.axes[side_index(side)][axis.index()]
    }

    /// A coarser axis on the same side holds the wildcard
    pub fn is_locked(&self, side: Side, axis: LocationAxis) -> bool {
        axis.coarser().any(|c| self.axis(side, c).is_wildcard())
    }

    /// Every coarser axis on the same side has a concrete value
    fn coarser_chosen(&self, side: Side, axis: LocationAxis) -> bool {
        axis.coarser().all(|c| {
            matches!(self.axis(side, c), AxisState::Ready { selected: Some(_), .. })
        })
    }

    pub fn is_loading(&self) -> bool {
        self.axes.iter().flatten().any(AxisState::is_loading)
    }

    /// Selected range; unselected axes stay `None`, wildcards become `*`
    pub fn range(&self) -> LocationRange {
        let selection = |side: Side| {
            let mut s = AxisSelection::default();
            for axis in LocationAxis::ALL {
                s.set(axis, self.axis(side, axis).selected().map(str::to_string));
            }
            s
        };
        LocationRange {
            block_id: self.block_id.clone(),
            origin: selection(Side::Origin),
            destination: selection(Side::Destination),
        }
    }

    /// Apply `event`, returning the next state and the fetches it requires.
    pub fn apply(&self, event: CascadeEvent) -> Transition {
        let mut next = self.clone();
        let mut fetches = Vec::new();
        match event {
            CascadeEvent::SelectBlock(block_id) => {
                next.select_block(block_id, &mut fetches);
            }
            CascadeEvent::Select { side, axis, value } => {
                if value == WILDCARD {
                    next.select_wildcard(side, axis);
                } else {
                    next.select(side, axis, value, &mut fetches);
                }
            }
            CascadeEvent::SelectWildcard { side, axis } => next.select_wildcard(side, axis),
            CascadeEvent::ClearWildcard { side, axis } => {
                next.clear_wildcard(side, axis, &mut fetches);
            }
            CascadeEvent::Deselect { side, axis } => next.deselect(side, axis, &mut fetches),
            CascadeEvent::OptionsLoaded { token, options } => {
                if next.is_current(&token) {
                    *next.axis_mut(token.side, token.axis) = AxisState::Ready {
                        options: sort_options(options),
                        selected: None,
                    };
                } else {
                    log::debug!("dropping stale options for {:?}", token);
                }
            }
            CascadeEvent::OptionsFailed { token, message } => {
                if next.is_current(&token) {
                    *next.axis_mut(token.side, token.axis) = AxisState::Unselected {
                        error: Some(message),
                    };
                }
            }
        }
        Transition {
            state: next,
            fetches,
        }
    }

    fn is_current(&self, token: &RequestToken) -> bool {
        matches!(
            self.axis(token.side, token.axis),
            AxisState::Loading { generation } if *generation == token.generation
        )
    }

    fn select_block(&mut self, block_id: Option<String>, fetches: &mut Vec<OptionFetch>) {
        self.block_id = block_id.filter(|b| !b.is_empty());
        for side in Side::ALL {
            for axis in LocationAxis::ALL {
                *self.axis_mut(side, axis) = AxisState::UNSELECTED;
            }
        }
        if self.block_id.is_some() {
            for side in Side::ALL {
                self.request(side, LocationAxis::Aisle, fetches);
            }
        }
    }

    fn select(&mut self, side: Side, axis: LocationAxis, value: String, fetches: &mut Vec<OptionFetch>) {
        if self.is_locked(side, axis) {
            return;
        }
        if self.axis(side, axis).is_wildcard() {
            if !self.axis(side, axis).options().contains(&value) {
                return;
            }
            self.clear_wildcard(side, axis, fetches);
            // this side's finer fetch is reissued for the chosen value below
            fetches.retain(|f| f.token.side != side);
        }
        let AxisState::Ready { options, selected } = self.axis_mut(side, axis) else {
            return;
        };
        if !options.contains(&value) {
            return;
        }
        *selected = Some(value);

        self.reset_finer(side, axis);
        if let Some(finer) = axis.next_finer() {
            self.request(side, finer, fetches);
        }
    }

    fn select_wildcard(&mut self, side: Side, axis: LocationAxis) {
        if self.is_locked(side, axis) {
            return;
        }
        let options = match self.axis(side, axis) {
            AxisState::Ready { options, .. } => options.clone(),
            _ => return,
        };

        // the mirror keeps only options it fetched under its own coarser values
        let mirror = side.mirror();
        let mirror_options = match self.axis(mirror, axis) {
            AxisState::Ready { options, .. } | AxisState::Wildcard { options } => options.clone(),
            _ => Vec::new(),
        };
        *self.axis_mut(side, axis) = AxisState::Wildcard { options };
        *self.axis_mut(mirror, axis) = AxisState::Wildcard {
            options: mirror_options,
        };
        self.reset_finer(side, axis);
        self.reset_finer(mirror, axis);
    }

    fn clear_wildcard(&mut self, side: Side, axis: LocationAxis, fetches: &mut Vec<OptionFetch>) {
        if !self.axis(side, axis).is_wildcard() {
            return;
        }
        for s in Side::ALL {
            let options = match self.axis(s, axis) {
                AxisState::Wildcard { options } => options.clone(),
                _ => continue,
            };
            if !self.coarser_chosen(s, axis) {
                *self.axis_mut(s, axis) = AxisState::UNSELECTED;
                self.reset_finer(s, axis);
                continue;
            }
            if options.is_empty() {
                self.reset_finer(s, axis);
                self.request(s, axis, fetches);
                continue;
            }
            // origin starts the range, destination ends it
            let selected = match s {
                Side::Origin => options.first().cloned(),
                Side::Destination => options.last().cloned(),
            };
            let has_value = selected.is_some();
            *self.axis_mut(s, axis) = AxisState::Ready { options, selected };
            self.reset_finer(s, axis);
            if has_value && !self.is_locked(s, axis) {
                if let Some(finer) = axis.next_finer() {
                    self.request(s, finer, fetches);
                }
            }
        }
    }

    fn deselect(&mut self, side: Side, axis: LocationAxis, fetches: &mut Vec<OptionFetch>) {
        if self.axis(side, axis).is_wildcard() {
            self.clear_wildcard(side, axis, fetches);
            return;
        }
        if self.is_locked(side, axis) {
            return;
        }
        let cleared = match self.axis_mut(side, axis) {
            AxisState::Ready { selected, .. } => selected.take().is_some(),
            _ => false,
        };
        if cleared {
            self.reset_finer(side, axis);
        }
    }

    fn reset_finer(&mut self, side: Side, axis: LocationAxis) {
        for finer in axis.finer() {
            *self.axis_mut(side, finer) = AxisState::UNSELECTED;
        }
    }

    fn request(&mut self, side: Side, axis: LocationAxis, fetches: &mut Vec<OptionFetch>) {
        let Some(block_id) = self.block_id.clone() else {
            return;
        };
        let fixed = axis
            .coarser()
            .filter_map(|c| {
                self.axis(side, c)
                    .selected()
                    .map(|v| (c, v.to_string()))
            })
            .collect();
        let generation = self.next_generation;
        self.next_generation += 1;
        *self.axis_mut(side, axis) = AxisState::Loading { generation };
        fetches.push(OptionFetch {
            token: RequestToken {
                side,
                axis,
                generation,
            },
            block_id,
            fixed,
        });
    }
}

/// Deduplicate and sort: numerically when every value is a number,
/// lexicographically otherwise.
pub fn sort_options(mut options: Vec<String>) -> Vec<String> {
    options.retain(|o| !o.is_empty() && o != WILDCARD);
    let numeric: Option<Vec<f64>> = options.iter().map(|o| o.trim().parse::<f64>().ok()).collect();
    match numeric {
        Some(values) if !values.is_empty() => {
            let mut pairs: Vec<(f64, String)> = values.into_iter().zip(options).collect();
            pairs.sort_by(|a, b| {
                a.0.partial_cmp(&b.0)
                    .unwrap_or(Ordering::Equal)
                    .then_with(|| a.1.cmp(&b.1))
            });
            pairs.dedup_by(|a, b| a.1 == b.1);
            pairs.into_iter().map(|(_, o)| o).collect()
        }
        _ => {
            options.sort();
            options.dedup();
            options
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use LocationAxis::*;
    use Side::*;

    fn opts(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    /// Answer every fetch of `t` with `options`
    fn answer_all(t: Transition, options: &[&str]) -> Transition {
        let mut state = t.state;
        let mut issued = Vec::new();
        for fetch in t.fetches {
            let next = state.apply(CascadeEvent::OptionsLoaded {
                token: fetch.token,
                options: opts(options),
            });
            state = next.state;
            issued.extend(next.fetches);
        }
        Transition {
            state,
            fetches: issued,
        }
    }

    fn with_block() -> LocationCascade {
        let t = LocationCascade::new().apply(CascadeEvent::SelectBlock(Some("b1".into())));
        answer_all(t, &["03", "01", "02"]).state
    }

    fn select(state: &LocationCascade, side: Side, axis: LocationAxis, value: &str) -> Transition {
        state.apply(CascadeEvent::Select {
            side,
            axis,
            value: value.into(),
        })
    }

    #[test]
    fn test_block_change_resets_and_fetches_aisles_once() {
        let mut state = with_block();
        state = answer_all(select(&state, Origin, Aisle, "01"), &["1", "2"]).state;
        state = answer_all(select(&state, Origin, Column, "2"), &["A"]).state;
        state = answer_all(select(&state, Destination, Aisle, "03"), &["7"]).state;

        let t = state.apply(CascadeEvent::SelectBlock(Some("b2".into())));
        for side in Side::ALL {
            for axis in LocationAxis::ALL {
                assert_eq!(t.state.axis(side, axis).selected(), None, "{:?} {:?}", side, axis);
            }
        }
        assert_eq!(t.fetches.len(), 2);
        let targets: Vec<(Side, LocationAxis)> =
            t.fetches.iter().map(|f| (f.token.side, f.token.axis)).collect();
        assert_eq!(targets, vec![(Origin, Aisle), (Destination, Aisle)]);
        assert!(t.fetches.iter().all(|f| f.block_id == "b2" && f.fixed.is_empty()));
        assert!(t.state.axis(Origin, Aisle).is_loading());
        assert_eq!(t.state.axis(Origin, Column), &AxisState::UNSELECTED);
    }

    #[test]
    fn test_clearing_block_issues_no_fetch() {
        let t = with_block().apply(CascadeEvent::SelectBlock(None));
        assert!(t.fetches.is_empty());
        assert_eq!(t.state.block_id(), None);
    }

    #[test]
    fn test_select_clears_finer_and_fetches_next() {
        let mut state = with_block();
        assert_eq!(state.axis(Origin, Aisle).options(), &opts(&["01", "02", "03"])[..]);

        state = answer_all(select(&state, Origin, Aisle, "01"), &["1", "2"]).state;
        state = answer_all(select(&state, Origin, Column, "1"), &["1"]).state;
        state = select(&state, Origin, Level, "1").state;

        let t = select(&state, Origin, Aisle, "02");
        assert_eq!(t.state.axis(Origin, Aisle).selected(), Some("02"));
        assert!(t.state.axis(Origin, Column).is_loading());
        assert_eq!(t.state.axis(Origin, Level), &AxisState::UNSELECTED);
        assert_eq!(t.state.axis(Origin, Position), &AxisState::UNSELECTED);
        // the other side is untouched
        assert_eq!(t.state.axis(Destination, Aisle), state.axis(Destination, Aisle));

        assert_eq!(t.fetches.len(), 1);
        assert_eq!(t.fetches[0].fixed, vec![(Aisle, "02".to_string())]);
        assert_eq!(
            t.fetches[0].variables()["filters"],
            serde_json::json!({ "blockId": "b1", "aisle": "02" })
        );
    }

    #[test]
    fn test_select_unknown_value_is_ignored() {
        let state = with_block();
        let t = select(&state, Origin, Aisle, "99");
        assert_eq!(t.state, state);
        assert!(t.fetches.is_empty());
    }

    #[test]
    fn test_wildcard_mirrors_and_locks() {
        let mut state = with_block();
        state = answer_all(select(&state, Origin, Aisle, "01"), &["1", "2"]).state;

        let t = state.apply(CascadeEvent::SelectWildcard { side: Origin, axis: Aisle });
        assert!(t.fetches.is_empty());
        let state = t.state;
        assert_eq!(state.axis(Origin, Aisle).selected(), Some(WILDCARD));
        assert_eq!(state.axis(Destination, Aisle).selected(), Some(WILDCARD));
        for side in Side::ALL {
            for axis in [Column, Level, Position] {
                assert!(state.is_locked(side, axis));
                assert_eq!(state.axis(side, axis), &AxisState::UNSELECTED);
            }
        }

        // locked axes ignore selection
        let blocked = state.apply(CascadeEvent::SelectWildcard { side: Destination, axis: Column });
        assert_eq!(blocked.state, state);

        let range = state.range();
        assert_eq!(range.origin.aisle.as_deref(), Some(WILDCARD));
        assert!(range.to_filters().get("originAisle").is_none());
    }

    #[test]
    fn test_clear_wildcard_restores_range_defaults() {
        for clearing_side in Side::ALL {
            let state = with_block()
                .apply(CascadeEvent::SelectWildcard { side: Origin, axis: Aisle })
                .state;
            let t = state.apply(CascadeEvent::ClearWildcard {
                side: clearing_side,
                axis: Aisle,
            });
            assert_eq!(t.state.axis(Origin, Aisle).selected(), Some("01"));
            assert_eq!(t.state.axis(Destination, Aisle).selected(), Some("03"));
            assert!(!t.state.is_locked(Origin, Column));
            assert!(!t.state.is_locked(Destination, Column));

            let mut targets: Vec<(Side, LocationAxis)> =
                t.fetches.iter().map(|f| (f.token.side, f.token.axis)).collect();
            targets.sort_by_key(|(s, a)| (*s == Destination, *a));
            assert_eq!(targets, vec![(Origin, Column), (Destination, Column)]);
        }
    }

    #[test]
    fn test_finer_wildcard_does_not_leak_into_unchosen_side() {
        let mut state = with_block();
        state = answer_all(select(&state, Origin, Aisle, "01"), &["A", "B"]).state;
        assert_eq!(state.axis(Destination, Aisle).selected(), None);

        let state = state
            .apply(CascadeEvent::SelectWildcard { side: Origin, axis: Column })
            .state;
        assert!(state.axis(Destination, Column).is_wildcard());
        assert!(state.axis(Destination, Column).options().is_empty());

        let t = state.apply(CascadeEvent::ClearWildcard {
            side: Destination,
            axis: Column,
        });
        assert_eq!(t.state.axis(Origin, Column).selected(), Some("A"));
        assert_eq!(t.state.axis(Destination, Column), &AxisState::UNSELECTED);

        let range = t.state.range();
        assert_eq!(range.destination.aisle, None);
        assert_eq!(range.destination.column, None);
        assert_eq!(
            Value::Object(range.to_filters()),
            serde_json::json!({ "blockId": "b1", "originAisle": "01", "originColumn": "A" })
        );

        assert_eq!(t.fetches.len(), 1);
        assert_eq!(t.fetches[0].token.side, Origin);
        assert_eq!(t.fetches[0].token.axis, Level);
        assert_eq!(
            t.fetches[0].fixed,
            vec![(Aisle, "01".to_string()), (Column, "A".to_string())]
        );
    }

    #[test]
    fn test_clear_wildcard_refetches_mirror_without_options() {
        let mut state = with_block();
        state = answer_all(select(&state, Origin, Aisle, "01"), &["A", "B"]).state;
        // destination column still loading when the wildcard arrives
        let t = select(&state, Destination, Aisle, "02");
        let pending = t.fetches[0].token;
        let state = t
            .state
            .apply(CascadeEvent::SelectWildcard { side: Origin, axis: Column })
            .state;

        // the superseded fetch no longer applies
        let late = state.apply(CascadeEvent::OptionsLoaded {
            token: pending,
            options: opts(&["X"]),
        });
        assert_eq!(late.state, state);

        let t = state.apply(CascadeEvent::ClearWildcard { side: Origin, axis: Column });
        assert_eq!(t.state.axis(Origin, Column).selected(), Some("A"));
        assert!(t.state.axis(Destination, Column).is_loading());
        let destination: Vec<_> = t.fetches.iter().filter(|f| f.token.side == Destination).collect();
        assert_eq!(destination.len(), 1);
        assert_eq!(destination[0].token.axis, Column);
        assert_eq!(destination[0].fixed, vec![(Aisle, "02".to_string())]);
    }

    #[test]
    fn test_deselect_drops_value_and_finer_axes() {
        let mut state = with_block();
        state = answer_all(select(&state, Origin, Aisle, "01"), &["1", "2"]).state;
        let pending = select(&state, Origin, Column, "2");
        let level_fetch = pending.fetches[0].token;

        let t = pending.state.apply(CascadeEvent::Deselect { side: Origin, axis: Column });
        assert!(t.fetches.is_empty());
        assert_eq!(t.state.axis(Origin, Column).selected(), None);
        assert_eq!(t.state.axis(Origin, Column).options(), &opts(&["1", "2"])[..]);
        assert_eq!(t.state.axis(Origin, Level), &AxisState::UNSELECTED);
        assert_eq!(t.state.axis(Origin, Aisle).selected(), Some("01"));

        // the level fetch issued for the dropped column no longer applies
        let late = t.state.apply(CascadeEvent::OptionsLoaded {
            token: level_fetch,
            options: opts(&["9"]),
        });
        assert_eq!(late.state, t.state);

        let range = t.state.range();
        assert_eq!(range.origin.column, None);
    }

    #[test]
    fn test_deselect_on_wildcard_clears_it() {
        let state = with_block()
            .apply(CascadeEvent::SelectWildcard { side: Origin, axis: Aisle })
            .state;
        let t = state.apply(CascadeEvent::Deselect { side: Destination, axis: Aisle });
        assert_eq!(t.state.axis(Origin, Aisle).selected(), Some("01"));
        assert_eq!(t.state.axis(Destination, Aisle).selected(), Some("03"));
    }

    #[test]
    fn test_concrete_select_on_wildcard_axis() {
        let state = with_block()
            .apply(CascadeEvent::SelectWildcard { side: Origin, axis: Aisle })
            .state;
        let t = select(&state, Origin, Aisle, "02");
        assert_eq!(t.state.axis(Origin, Aisle).selected(), Some("02"));
        assert_eq!(t.state.axis(Destination, Aisle).selected(), Some("03"));
        let origin_fetches: Vec<_> = t.fetches.iter().filter(|f| f.token.side == Origin).collect();
        assert_eq!(origin_fetches.len(), 1);
        assert_eq!(origin_fetches[0].fixed, vec![(Aisle, "02".to_string())]);
    }

    #[test]
    fn test_stale_response_is_dropped() {
        let state = with_block();
        // two quick selections on the same side: only the second fetch is current
        let first = select(&state, Origin, Aisle, "01");
        let second = select(&first.state, Origin, Aisle, "02");
        let stale = first.fetches[0].token;
        let current = second.fetches[0].token;
        assert_eq!(stale.axis, Column);
        assert_ne!(stale.generation, current.generation);

        let after_current = second.state.apply(CascadeEvent::OptionsLoaded {
            token: current,
            options: opts(&["20", "21"]),
        });
        let after_stale = after_current.state.apply(CascadeEvent::OptionsLoaded {
            token: stale,
            options: opts(&["10", "11"]),
        });
        assert_eq!(after_stale.state.axis(Origin, Column).options(), &opts(&["20", "21"])[..]);

        // stale failure after a block change does not touch the fresh axis
        let reset = after_stale.state.apply(CascadeEvent::SelectBlock(Some("b2".into())));
        let failed = reset.state.apply(CascadeEvent::OptionsFailed {
            token: current,
            message: "boom".into(),
        });
        assert_eq!(failed.state, reset.state);
    }

    #[test]
    fn test_concurrent_sides_do_not_interfere() {
        let t = LocationCascade::new().apply(CascadeEvent::SelectBlock(Some("b1".into())));
        let (origin, destination) = (t.fetches[0].token, t.fetches[1].token);
        let state = t
            .state
            .apply(CascadeEvent::OptionsLoaded {
                token: destination,
                options: opts(&["9"]),
            })
            .state
            .apply(CascadeEvent::OptionsLoaded {
                token: origin,
                options: opts(&["1"]),
            })
            .state;
        assert_eq!(state.axis(Origin, Aisle).options(), &opts(&["1"])[..]);
        assert_eq!(state.axis(Destination, Aisle).options(), &opts(&["9"])[..]);
    }

    #[test]
    fn test_failed_fetch_leaves_axis_unselected() {
        let t = LocationCascade::new().apply(CascadeEvent::SelectBlock(Some("b1".into())));
        let state = t
            .state
            .apply(CascadeEvent::OptionsFailed {
                token: t.fetches[0].token,
                message: "network error".into(),
            })
            .state;
        let axis = state.axis(Origin, Aisle);
        assert_eq!(axis.selected(), None);
        assert!(axis.options().is_empty());
        assert_eq!(axis.error(), Some("network error"));
        assert!(state.axis(Destination, Aisle).is_loading());
    }

    #[test]
    fn test_sort_options() {
        assert_eq!(sort_options(opts(&["10", "9", "1", "9"])), opts(&["1", "9", "10"]));
        assert_eq!(sort_options(opts(&["B", "a", "10", "A"])), opts(&["10", "A", "B", "a"]));
        assert_eq!(sort_options(opts(&["", "*", "2"])), opts(&["2"]));
        assert!(sort_options(Vec::new()).is_empty());
    }
}
