use serde_json::{Map, Value};

use super::{pizza_mapper::PizzaMapper, restaurant_mapper::RestaurantMapper};
use crate::domain::commands::restaurant_pizza::CreateRestaurantPizzaCommand;
use crate::domain::models::{
    RestaurantPizza as DomainRestaurantPizza, RestaurantPizzaDetails, RestaurantPizzaWithPizza as DomainWithPizza,
};
use shared::{RestaurantPizza as SharedRestaurantPizza, RestaurantPizzaDetail, RestaurantPizzaWithPizza};

/// Mapper between request bodies, domain associations and their wire shapes.
pub struct RestaurantPizzaMapper;

impl RestaurantPizzaMapper {
    /// Pull the three known fields out of a JSON object body; other keys are ignored.
    pub fn to_create_command(mut body: Map<String, Value>) -> CreateRestaurantPizzaCommand {
        CreateRestaurantPizzaCommand {
            price: body.remove("price"),
            pizza_id: body.remove("pizza_id"),
            restaurant_id: body.remove("restaurant_id"),
        }
    }

    pub fn to_dto(domain: DomainRestaurantPizza) -> SharedRestaurantPizza {
        SharedRestaurantPizza {
            id: domain.id,
            price: domain.price,
            pizza_id: domain.pizza_id,
            restaurant_id: domain.restaurant_id,
        }
    }

    pub fn to_with_pizza_dto(domain: DomainWithPizza) -> RestaurantPizzaWithPizza {
        RestaurantPizzaWithPizza {
            restaurant_pizza: Self::to_dto(domain.restaurant_pizza),
            pizza: domain.pizza.map(PizzaMapper::to_dto),
        }
    }

    pub fn to_detail_dto(domain: RestaurantPizzaDetails) -> RestaurantPizzaDetail {
        RestaurantPizzaDetail {
            restaurant_pizza: Self::to_dto(domain.restaurant_pizza),
            pizza: PizzaMapper::to_dto(domain.pizza),
            restaurant: RestaurantMapper::to_dto(domain.restaurant),
        }
    }
}
