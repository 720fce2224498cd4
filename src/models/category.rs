#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EntryKind {
    Income,
    Expense,
}

impl EntryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income => "Income",
            Self::Expense => "Expense",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "income" | "in" => Some(Self::Income),
            "expense" | "out" => Some(Self::Expense),
            _ => None,
        }
    }
}

impl std::fmt::Display for EntryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExpenseCategory {
    Food,
    Transport,
    Bills,
    Entertainment,
    Shopping,
    Health,
    Education,
    Investment,
    Charity,
    Other,
}

impl ExpenseCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Food => "Food",
            Self::Transport => "Transport",
            Self::Bills => "Bills",
            Self::Entertainment => "Entertainment",
            Self::Shopping => "Shopping",
            Self::Health => "Health",
            Self::Education => "Education",
            Self::Investment => "Investment",
            Self::Charity => "Charity",
            Self::Other => "Other",
        }
    }

    /// Unrecognized names fold into `Other` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "food" | "groceries" | "dining" => Self::Food,
            "transport" | "transportation" | "transit" => Self::Transport,
            "bills" | "utilities" => Self::Bills,
            "entertainment" | "fun" => Self::Entertainment,
            "shopping" => Self::Shopping,
            "health" | "healthcare" | "medical" => Self::Health,
            "education" | "learning" => Self::Education,
            "investment" | "investing" => Self::Investment,
            "charity" | "donation" | "giving" => Self::Charity,
            _ => Self::Other,
        }
    }

    pub fn all() -> &'static [ExpenseCategory] {
        &[
            Self::Food,
            Self::Transport,
            Self::Bills,
            Self::Entertainment,
            Self::Shopping,
            Self::Health,
            Self::Education,
            Self::Investment,
            Self::Charity,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for ExpenseCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum IncomeCategory {
    Salary,
    Bonus,
    Freelance,
    Interest,
    Gift,
    Other,
}

impl IncomeCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Salary => "Salary",
            Self::Bonus => "Bonus",
            Self::Freelance => "Freelance",
            Self::Interest => "Interest",
            Self::Gift => "Gift",
            Self::Other => "Other",
        }
    }

    /// Unrecognized names fold into `Other` rather than failing.
    pub fn parse(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "salary" | "wages" | "paycheck" => Self::Salary,
            "bonus" => Self::Bonus,
            "freelance" | "contract" => Self::Freelance,
            "interest" | "dividend" | "dividends" => Self::Interest,
            "gift" => Self::Gift,
            _ => Self::Other,
        }
    }

    pub fn all() -> &'static [IncomeCategory] {
        &[
            Self::Salary,
            Self::Bonus,
            Self::Freelance,
            Self::Interest,
            Self::Gift,
            Self::Other,
        ]
    }
}

impl std::fmt::Display for IncomeCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A category is always paired with the kind whose vocabulary it belongs
/// to, so an entry cannot carry an expense label on an income record or
/// vice versa.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Income(IncomeCategory),
    Expense(ExpenseCategory),
}

impl Category {
    pub fn kind(&self) -> EntryKind {
        match self {
            Self::Income(_) => EntryKind::Income,
            Self::Expense(_) => EntryKind::Expense,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Income(c) => c.as_str(),
            Self::Expense(c) => c.as_str(),
        }
    }

    /// Parse a category name within the vocabulary of the given kind.
    pub fn parse(kind: EntryKind, s: &str) -> Self {
        match kind {
            EntryKind::Income => Self::Income(IncomeCategory::parse(s)),
            EntryKind::Expense => Self::Expense(ExpenseCategory::parse(s)),
        }
    }

    /// Resolve user input to a category. Accepts a bare name ("food"),
    /// or a kind-qualified form ("income:other") for names [`infer`]
    /// cannot place on its own.
    ///
    /// [`infer`]: Category::infer
    pub fn resolve(s: &str) -> Option<Self> {
        match s.split_once(':') {
            Some((kind, name)) => EntryKind::parse(kind).map(|k| Self::parse(k, name)),
            None => Self::infer(s),
        }
    }

    /// Resolve a bare category name to the kind whose vocabulary names it.
    /// Returns `None` when the name is unknown or ambiguous ("other"
    /// exists in both vocabularies), in which case the caller must ask
    /// for an explicit kind.
    pub fn infer(s: &str) -> Option<Self> {
        if s.trim().to_lowercase() == "other" {
            return None;
        }
        let expense = ExpenseCategory::parse(s);
        if expense != ExpenseCategory::Other {
            return Some(Self::Expense(expense));
        }
        let income = IncomeCategory::parse(s);
        if income != IncomeCategory::Other {
            return Some(Self::Income(income));
        }
        None
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
