#[allow(unused_macros)]
macro_rules! ids {
    ($($id: expr),* $(,)?) => {
        vec![$($crate::input::InputIdentifier::from($id)),*]
    };
}

#[allow(unused_macros)]
macro_rules! press {
    ($kc: expr) => {
        $crate::input::InputObject::key($kc, $crate::input::InputState::Begin)
    };
    ($kc: expr, $km: expr) => {
        press!($kc).with_modifiers($km)
    };
}

#[allow(unused_macros)]
macro_rules! release {
    ($kc: expr) => {
        $crate::input::InputObject::key($kc, $crate::input::InputState::End)
    };
    ($kc: expr, $km: expr) => {
        release!($kc).with_modifiers($km)
    };
}

#[allow(unused_macros)]
macro_rules! click {
    ($it: expr) => {
        $crate::input::InputObject::of_type($it, $crate::input::InputState::Begin)
    };
    ($it: expr, $km: expr) => {
        click!($it).with_modifiers($km)
    };
}

#[allow(unused_macros)]
macro_rules! drag {
    ($it: expr) => {
        $crate::input::InputObject::of_type($it, $crate::input::InputState::Change)
    };
    ($it: expr, $km: expr) => {
        drag!($it).with_modifiers($km)
    };
}

#[allow(unused_macros)]
macro_rules! unclick {
    ($it: expr) => {
        $crate::input::InputObject::of_type($it, $crate::input::InputState::End)
    };
    ($it: expr, $km: expr) => {
        unclick!($it).with_modifiers($km)
    };
}

#[cfg(test)]
pub(crate) use self::testing::Recorder;

#[cfg(test)]
mod testing {
    use std::cell::RefCell;
    use std::rc::Rc;

    use crate::action::{Action, ActionCallback};
    use crate::input::{InputObject, InputState};

    #[derive(Default)]
    struct Recorded {
        began: usize,
        changed: usize,
        ended: usize,
        states: Vec<InputState>,
    }

    /// Counts the events and callback invocations that an action produces.
    #[derive(Clone, Default)]
    pub(crate) struct Recorder {
        inner: Rc<RefCell<Recorded>>,
    }

    impl Recorder {
        pub(crate) fn callback(&self) -> ActionCallback {
            let inner = self.inner.clone();

            Box::new(move |_: &str, state: InputState, _: &InputObject| {
                inner.borrow_mut().states.push(state);
            })
        }

        pub(crate) fn watch(&self, action: &Action) {
            let inner = self.inner.clone();
            action.began().connect(move |_| inner.borrow_mut().began += 1);

            let inner = self.inner.clone();
            action.changed().connect(move |_| inner.borrow_mut().changed += 1);

            let inner = self.inner.clone();
            action.ended().connect(move |_| inner.borrow_mut().ended += 1);
        }

        pub(crate) fn began(&self) -> usize {
            self.inner.borrow().began
        }

        pub(crate) fn changed(&self) -> usize {
            self.inner.borrow().changed
        }

        pub(crate) fn ended(&self) -> usize {
            self.inner.borrow().ended
        }

        pub(crate) fn calls(&self) -> usize {
            self.inner.borrow().states.len()
        }

        pub(crate) fn states(&self) -> Vec<InputState> {
            self.inner.borrow().states.clone()
        }
    }
}
