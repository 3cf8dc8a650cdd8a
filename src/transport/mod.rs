//! Transport layer: wire-format details (form encoding, response interpretation).

mod form;
mod interpret;

pub use form::{
    encode_add_order_params, encode_form, encode_order_params, encode_orders_params,
    encode_refill_params, encode_refills_params,
};
pub use interpret::{ResponseError, interpret_list, interpret_object};
