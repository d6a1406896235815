mod borrow;
mod collateral;
mod interest;
mod supply;
