pub mod auto;
pub mod bicycle;
pub mod bus;
pub mod pedestrian;
pub mod transit;
pub mod truck;
