#[derive(Debug, Clone, PartialEq)]
pub struct Pizza {
    pub id: i64,
    pub name: String,
    pub ingredients: String,
}

/// A pizza that has not been stored yet
#[derive(Debug, Clone, PartialEq)]
pub struct NewPizza {
    pub name: String,
    pub ingredients: String,
}
