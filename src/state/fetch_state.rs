// ============================================================================
// FETCH STATE - contenedor explícito para data/loading/error de página
// ============================================================================

/// Phase of a page-local fetch: `Idle → Loading → {Loaded, Errored}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FetchPhase {
    Idle,
    Loading,
    Loaded,
    Errored,
}

/// Page-local fetch state. `data` always holds a usable value: the caller's
/// initial value until a request resolves, then the last resolved/patched one.
/// A rejected request leaves `data` untouched.
#[derive(Debug, Clone, PartialEq)]
pub struct FetchState<T> {
    data: T,
    phase: FetchPhase,
}

impl<T: Clone> FetchState<T> {
    pub fn new(initial: T) -> Self {
        Self {
            data: initial,
            phase: FetchPhase::Idle,
        }
    }

    pub fn data(&self) -> &T {
        &self.data
    }

    pub fn phase(&self) -> FetchPhase {
        self.phase
    }

    pub fn is_loading(&self) -> bool {
        self.phase == FetchPhase::Loading
    }

    pub fn has_error(&self) -> bool {
        self.phase == FetchPhase::Errored
    }

    /// A request went out.
    pub fn start(&self) -> Self {
        Self {
            data: self.data.clone(),
            phase: FetchPhase::Loading,
        }
    }

    /// The request parsed successfully.
    pub fn resolve(&self, data: T) -> Self {
        Self {
            data,
            phase: FetchPhase::Loaded,
        }
    }

    /// Network/non-2xx failure: data stays as-is.
    pub fn reject(&self) -> Self {
        Self {
            data: self.data.clone(),
            phase: FetchPhase::Errored,
        }
    }

    /// Imperative patch for optimistic local mutations; phase is unchanged.
    pub fn with_data(&self, data: T) -> Self {
        Self {
            data,
            phase: self.phase,
        }
    }

    /// Imperative loading flag used to bracket follow-up mutations.
    pub fn with_loading(&self, loading: bool) -> Self {
        Self {
            data: self.data.clone(),
            phase: if loading {
                FetchPhase::Loading
            } else {
                FetchPhase::Loaded
            },
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_fetch_keeps_initial_data() {
        let state = FetchState::new(Vec::<u64>::new()).start().reject();
        assert!(state.has_error());
        assert!(!state.is_loading());
        assert!(state.data().is_empty());
    }

    #[test]
    fn resolved_fetch_replaces_data() {
        let state = FetchState::new(Vec::new()).start().resolve(vec![5]);
        assert!(!state.has_error());
        assert!(!state.is_loading());
        assert_eq!(state.data(), &vec![5]);
    }

    #[test]
    fn optimistic_patch_keeps_phase() {
        let state = FetchState::new(vec![1, 2, 3]).start().resolve(vec![1, 2, 3]);
        let patched = state.with_data(vec![1, 3]);
        assert_eq!(patched.phase(), FetchPhase::Loaded);
        assert_eq!(patched.data(), &vec![1, 3]);
    }

    #[test]
    fn loading_flag_round_trip() {
        let state = FetchState::new(vec![1]).start().resolve(vec![1]);
        let busy = state.with_loading(true);
        assert!(busy.is_loading());
        let done = busy.with_loading(false);
        assert!(!done.is_loading());
        assert!(!done.has_error());
        assert_eq!(done.data(), &vec![1]);
    }
}
