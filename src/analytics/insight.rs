use std::collections::BTreeMap;

use rand::Rng;

use crate::models::{Entry, ExpenseCategory};

use super::totals::expense_totals;

/// One advisory line for the dashboard.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct Insight {
    pub(crate) icon: &'static str,
    pub(crate) message: &'static str,
}

/// Everything a rule predicate may look at for one evaluation.
struct RuleContext {
    income: i64,
    expense: i64,
    /// Denominator for share-of-spending checks; held at 1 when there
    /// are no expenses so every share stays defined.
    spend_base: i64,
    by_category: BTreeMap<ExpenseCategory, i64>,
}

impl RuleContext {
    fn category_total(&self, category: ExpenseCategory) -> i64 {
        self.by_category.get(&category).copied().unwrap_or(0)
    }
}

/// A single advisory rule. Terminal rules end evaluation on match;
/// the rest accumulate as candidates. Table order is the priority order
/// for candidate selection.
struct Rule {
    terminal: bool,
    applies: fn(&RuleContext) -> bool,
    variants: &'static [Insight],
}

// ── Predicates ────────────────────────────────────────────────
// Share thresholds are integer cross-multiplications; amounts are whole
// currency units, so the comparisons are exact. The products are taken
// in i128 because a 100x product of an i64-scale amount overflows i64.

fn exceeds_pct(part: i64, pct: i64, whole: i64) -> bool {
    100 * i128::from(part) > i128::from(pct) * i128::from(whole)
}

fn under_pct(part: i64, pct: i64, whole: i64) -> bool {
    100 * i128::from(part) < i128::from(pct) * i128::from(whole)
}

fn no_data(ctx: &RuleContext) -> bool {
    ctx.income == 0 && ctx.expense == 0
}

fn overspent(ctx: &RuleContext) -> bool {
    // Only meaningful once income is recorded; an expense-only month
    // falls through to the share rules or the fallback instead.
    ctx.income > 0 && ctx.expense > ctx.income
}

fn thin_margin(ctx: &RuleContext) -> bool {
    // Under 10% of income left over.
    ctx.income > 0 && under_pct(ctx.income - ctx.expense, 10, ctx.income)
}

fn food_heavy(ctx: &RuleContext) -> bool {
    // Food above 40% of spending.
    exceeds_pct(ctx.category_total(ExpenseCategory::Food), 40, ctx.spend_base)
}

fn discretionary_heavy(ctx: &RuleContext) -> bool {
    // Entertainment plus shopping above 30% of spending.
    let fun = ctx.category_total(ExpenseCategory::Entertainment)
        + ctx.category_total(ExpenseCategory::Shopping);
    exceeds_pct(fun, 30, ctx.spend_base)
}

fn transport_heavy(ctx: &RuleContext) -> bool {
    // Transport above 25% of spending.
    exceeds_pct(ctx.category_total(ExpenseCategory::Transport), 25, ctx.spend_base)
}

fn invested(ctx: &RuleContext) -> bool {
    ctx.category_total(ExpenseCategory::Investment) > 0
}

fn gave_to_charity(ctx: &RuleContext) -> bool {
    ctx.category_total(ExpenseCategory::Charity) > 0
}

fn spent_on_health(ctx: &RuleContext) -> bool {
    ctx.category_total(ExpenseCategory::Health) > 0
}

fn spent_on_learning(ctx: &RuleContext) -> bool {
    ctx.category_total(ExpenseCategory::Education) > 0
}

fn high_saver(ctx: &RuleContext) -> bool {
    // Over half of income kept.
    ctx.income > 0 && exceeds_pct(ctx.income - ctx.expense, 50, ctx.income)
}

fn stable(ctx: &RuleContext) -> bool {
    ctx.income > ctx.expense
}

// ── Messages ──────────────────────────────────────────────────

const EMPTY_STATE: &[Insight] = &[Insight {
    icon: "😴",
    message: "Nothing recorded this month. The ledger is taking a nap.",
}];

const OVERSPEND: &[Insight] = &[Insight {
    icon: "🚨",
    message: "Spending has passed income this month. Time to pump the brakes.",
}];

const THIN_MARGIN: &[Insight] = &[
    Insight {
        icon: "⚖️",
        message: "Less than 10% of income left over. One surprise bill tips the month.",
    },
    Insight {
        icon: "⚖️",
        message: "Income and spending are nearly level. Not much slack left.",
    },
];

const FOOD_HEAVY: &[Insight] = &[
    Insight {
        icon: "🍔",
        message: "Over 40% of spending went to food. A few home-cooked meals would help.",
    },
    Insight {
        icon: "🍔",
        message: "Food is the biggest bite this month, more than 40% of all spending.",
    },
    Insight {
        icon: "🍔",
        message: "Big month for eating out. Food leads every other category.",
    },
];

const DISCRETIONARY_HEAVY: &[Insight] = &[
    Insight {
        icon: "🛍️",
        message: "Entertainment and shopping took over 30% of spending. Fun, but watch it.",
    },
    Insight {
        icon: "🛍️",
        message: "Nearly a third of spending went to wants rather than needs.",
    },
];

const TRANSPORT_HEAVY: &[Insight] = &[
    Insight {
        icon: "🚖",
        message: "Transport is over a quarter of spending. Transit or carpooling could help.",
    },
    Insight {
        icon: "🚖",
        message: "Getting around is costing a lot, more than 25% of the month's spending.",
    },
];

const INVESTED: &[Insight] = &[Insight {
    icon: "📈",
    message: "Money went into investments this month. Future you says thanks.",
}];

const GAVE: &[Insight] = &[Insight {
    icon: "🤲",
    message: "You gave to charity this month. Generosity counts as wealth too.",
}];

const HEALTH: &[Insight] = &[Insight {
    icon: "💊",
    message: "Health spending this month. Taking care of yourself is money well spent.",
}];

const LEARNING: &[Insight] = &[Insight {
    icon: "📚",
    message: "You paid for learning this month. That kind of spending compounds.",
}];

const HIGH_SAVER: &[Insight] = &[
    Insight {
        icon: "👑",
        message: "More than half of income saved. The savings crown is yours.",
    },
    Insight {
        icon: "👑",
        message: "Over 50% of income untouched this month. Excellent discipline.",
    },
];

const STABLE: &[Insight] = &[
    Insight {
        icon: "✅",
        message: "Income covers spending with room to spare. Steady as it goes.",
    },
    Insight {
        icon: "✅",
        message: "A balanced month, earnings comfortably ahead of expenses.",
    },
];

const FALLBACK: Insight = Insight {
    icon: "🤔",
    message: "Keep logging entries and the picture will sharpen.",
};

/// Ordered by priority: terminal states, then specific spending
/// warnings, then category positives, then the generic reads.
static RULES: &[Rule] = &[
    Rule {
        terminal: true,
        applies: no_data,
        variants: EMPTY_STATE,
    },
    Rule {
        terminal: true,
        applies: overspent,
        variants: OVERSPEND,
    },
    Rule {
        terminal: false,
        applies: thin_margin,
        variants: THIN_MARGIN,
    },
    Rule {
        terminal: false,
        applies: food_heavy,
        variants: FOOD_HEAVY,
    },
    Rule {
        terminal: false,
        applies: discretionary_heavy,
        variants: DISCRETIONARY_HEAVY,
    },
    Rule {
        terminal: false,
        applies: transport_heavy,
        variants: TRANSPORT_HEAVY,
    },
    Rule {
        terminal: false,
        applies: invested,
        variants: INVESTED,
    },
    Rule {
        terminal: false,
        applies: gave_to_charity,
        variants: GAVE,
    },
    Rule {
        terminal: false,
        applies: spent_on_health,
        variants: HEALTH,
    },
    Rule {
        terminal: false,
        applies: spent_on_learning,
        variants: LEARNING,
    },
    Rule {
        terminal: false,
        applies: high_saver,
        variants: HIGH_SAVER,
    },
    Rule {
        terminal: false,
        applies: stable,
        variants: STABLE,
    },
];

/// Select exactly one insight for the month. Which rule fires is fully
/// determined by the inputs; the random source only varies the phrasing
/// among the winning rule's message variants.
pub(crate) fn select_insight(
    income: i64,
    expense: i64,
    entries: &[Entry],
    rng: &mut impl Rng,
) -> Insight {
    let ctx = RuleContext {
        income,
        expense,
        spend_base: if expense > 0 { expense } else { 1 },
        by_category: expense_totals(entries),
    };

    let mut candidates: Vec<&Rule> = Vec::new();
    for rule in RULES {
        if !(rule.applies)(&ctx) {
            continue;
        }
        if rule.terminal {
            return pick_variant(rule, rng);
        }
        candidates.push(rule);
    }

    match candidates.first() {
        Some(rule) => pick_variant(rule, rng),
        None => FALLBACK,
    }
}

fn pick_variant(rule: &Rule, rng: &mut impl Rng) -> Insight {
    match rule.variants {
        [] => FALLBACK,
        [only] => *only,
        many => many[rng.gen_range(0..many.len())],
    }
}
