use super::restaurant_pizza_mapper::RestaurantPizzaMapper;
use crate::domain::models::{Restaurant as DomainRestaurant, RestaurantDetails};
use shared::{Restaurant as SharedRestaurant, RestaurantDetail};

/// Mapper from domain Restaurant models to their summary and detail shapes.
pub struct RestaurantMapper;

impl RestaurantMapper {
    /// `{id, name, address}`
    pub fn to_dto(domain: DomainRestaurant) -> SharedRestaurant {
        SharedRestaurant {
            id: domain.id,
            name: domain.name,
            address: domain.address,
        }
    }

    pub fn to_list_dto(domain_restaurants: Vec<DomainRestaurant>) -> Vec<SharedRestaurant> {
        domain_restaurants.into_iter().map(Self::to_dto).collect()
    }

    /// Summary fields plus `restaurant_pizzas`, each carrying its pizza
    pub fn to_detail_dto(domain: RestaurantDetails) -> RestaurantDetail {
        RestaurantDetail {
            restaurant: Self::to_dto(domain.restaurant),
            restaurant_pizzas: domain
                .restaurant_pizzas
                .into_iter()
                .map(RestaurantPizzaMapper::to_with_pizza_dto)
                .collect(),
        }
    }
}
