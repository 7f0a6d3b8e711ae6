pub mod fsm;
pub mod mover;
pub mod requests;
pub mod validator;


pub use fsm::Dispatcher;
