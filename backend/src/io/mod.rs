//! # IO Module
//!
//! The HTTP boundary: translates requests into domain operations and domain
//! results into JSON responses with the right status codes.
//!
//! ## Supported Operations
//!
//! - **GET /restaurants**, **GET /restaurants/:id**, **DELETE /restaurants/:id**
//! - **GET /pizzas**
//! - **POST /restaurant_pizzas**
//! - **GET /**: welcome page

pub mod rest;

pub use rest::*;
