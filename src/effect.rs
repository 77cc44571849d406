use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::environment::types::Feedback;

/// What a reducer wants to happen next. Initiating arms of an async
/// operation hand back a `Future`; completion arms mutate state and
/// optionally emit `Feedback`.
pub enum Effect<Action> {
    None,
    /// Dispatch another action immediately.
    Action(Action),
    /// Run async work. The store dispatches the produced action once it
    /// resolves.
    Future(BoxFuture<'static, Action>),
    /// A transient user-visible notification. Display is up to the
    /// embedding UI.
    Feedback(Feedback),
    Merge(Vec<Effect<Action>>),
}

impl<Action> Effect<Action> {
    pub const NONE: Self = Effect::None;

    pub fn future<T, F>(
        future: F,
        into_action: impl FnOnce(T) -> Action + Send + 'static,
    ) -> Self
    where
        F: std::future::Future<Output = T> + Send + 'static,
        T: Send + 'static,
        Action: 'static,
    {
        Effect::Future(async move { into_action(future.await) }.boxed())
    }

    pub fn action(action: Action) -> Self {
        Effect::Action(action)
    }

    pub fn feedback(feedback: Feedback) -> Self {
        Effect::Feedback(feedback)
    }

    pub fn merge(effects: Vec<Effect<Action>>) -> Self {
        Effect::Merge(effects)
    }

    /// Lift a child effect into a parent action space.
    pub fn map<Parent>(
        self,
        into_parent: impl Fn(Action) -> Parent + Clone + Send + Sync + 'static,
    ) -> Effect<Parent>
    where
        Action: Send + 'static,
        Parent: 'static,
    {
        match self {
            Effect::None => Effect::None,
            Effect::Action(action) => Effect::Action(into_parent(action)),
            Effect::Future(future) => {
                Effect::Future(async move { into_parent(future.await) }.boxed())
            }
            Effect::Feedback(feedback) => Effect::Feedback(feedback),
            Effect::Merge(effects) => Effect::Merge(
                effects
                    .into_iter()
                    .map(|effect| effect.map(into_parent.clone()))
                    .collect(),
            ),
        }
    }
}

impl<Action> std::fmt::Debug for Effect<Action>
where
    Action: std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Effect::None => write!(f, "None"),
            Effect::Action(action) => f.debug_tuple("Action").field(action).finish(),
            Effect::Future(_) => write!(f, "Future"),
            Effect::Feedback(feedback) => f.debug_tuple("Feedback").field(feedback).finish(),
            Effect::Merge(effects) => f.debug_tuple("Merge").field(effects).finish(),
        }
    }
}
