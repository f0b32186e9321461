use crate::domain::models::Pizza as DomainPizza;
use shared::Pizza as SharedPizza;

/// Mapper from domain Pizza models to the `{id, name, ingredients}` shape.
pub struct PizzaMapper;

impl PizzaMapper {
    pub fn to_dto(domain: DomainPizza) -> SharedPizza {
        SharedPizza {
            id: domain.id,
            name: domain.name,
            ingredients: domain.ingredients,
        }
    }

    pub fn to_list_dto(domain_pizzas: Vec<DomainPizza>) -> Vec<SharedPizza> {
        domain_pizzas.into_iter().map(Self::to_dto).collect()
    }
}
