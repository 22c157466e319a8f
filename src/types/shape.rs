/// Operation a resource handler is serving; decides the output shape.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Action {
    List,
    Retrieve,
    Create,
    Update,
    Random,
}

impl Action {
    /// Denormalized reads use the full-info shape, everything else the plain one.
    pub fn full_info(self) -> bool {
        matches!(self, Action::List | Action::Random)
    }
}
