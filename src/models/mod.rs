mod category;
mod entry;
mod period;

pub use category::{Category, EntryKind, ExpenseCategory, IncomeCategory};
pub use entry::Entry;
pub use period::PeriodKey;

#[cfg(test)]
mod tests;
