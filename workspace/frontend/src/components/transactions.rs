mod list;

pub use list::TransactionList;
