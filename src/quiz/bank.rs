//! The embedded question catalog.
//!
//! Two fixed sets, one per [`Level`]. The tables are the canonical source;
//! [`questions`] hands out fresh copies so a run can shuffle its snapshot
//! without touching the catalog.

use super::{Level, Question};

struct RawQuestion {
    prompt: &'static str,
    options: [&'static str; 4],
    answer: &'static str,
}

/// A fresh, ordered copy of the level's question set.
pub fn questions(level: Level) -> Vec<Question> {
    let (table, id_base) = match level {
        Level::Basic => (BASIC_QUESTIONS, 1),
        Level::Advanced => (ADVANCED_QUESTIONS, 101),
    };

    table
        .iter()
        .enumerate()
        .map(|(i, raw)| Question {
            id: id_base + i as u32,
            prompt: raw.prompt.to_string(),
            options: raw.options.iter().map(|o| o.to_string()).collect(),
            correct_option: raw.answer.to_string(),
        })
        .collect()
}

/// Sanity-checks the catalog tables. Called once at startup; a failure here
/// means the tables were edited badly, so it panics rather than returning an
/// error the caller could not act on.
pub fn validate() {
    let mut seen_ids = std::collections::HashSet::new();
    for level in [Level::Basic, Level::Advanced] {
        for question in questions(level) {
            assert_eq!(
                question.options.len(),
                4,
                "question {} must have 4 options",
                question.id
            );
            let matching = question
                .options
                .iter()
                .filter(|o| **o == question.correct_option)
                .count();
            assert_eq!(
                matching, 1,
                "question {} must have exactly one option equal to its answer",
                question.id
            );
            assert!(
                seen_ids.insert(question.id),
                "duplicate question id {}",
                question.id
            );
        }
    }
}

const BASIC_QUESTIONS: &[RawQuestion] = &[
    RawQuestion {
        prompt: "What does phishing refer to in the context of financial fraud?",
        options: [
            "A. A secure method of transferring money online",
            "B. Fraudulent attempts to obtain sensitive information by pretending to be a trusted entity",
            "C. A type of bank transaction",
            "D. A legal way to share personal data",
        ],
        answer: "B. Fraudulent attempts to obtain sensitive information by pretending to be a trusted entity",
    },
    RawQuestion {
        prompt: "What is the safest way to use your credit card online?",
        options: [
            "A. Enter your details on any website",
            "B. Use a secure, encrypted website with \"https://\" in the URL",
            "C. Share your details over email if requested",
            "D. Avoid using credit cards online altogether",
        ],
        answer: "B. Use a secure, encrypted website with \"https://\" in the URL",
    },
    RawQuestion {
        prompt: "What does two-factor authentication (2FA) enhance?",
        options: [
            "A. Ease of accessing accounts",
            "B. Security by requiring a second form of verification",
            "C. Simplicity of password management",
            "D. Speed of logging into accounts",
        ],
        answer: "B. Security by requiring a second form of verification",
    },
    RawQuestion {
        prompt: "Which of the following is a common sign of identity theft?",
        options: [
            "A. Receiving promotional emails from a company",
            "B. Unfamiliar charges on your bank or credit card statement",
            "C. Receiving a new credit card you requested",
            "D. A sudden increase in your credit score",
        ],
        answer: "B. Unfamiliar charges on your bank or credit card statement",
    },
    RawQuestion {
        prompt: "If you receive an email from a bank asking for your account details, you should",
        options: [
            "A. Reply immediately to verify your account",
            "B. Click on the provided link to enter your information",
            "C. Avoid responding and contact your bank directly using official contact details",
            "D. Forward the email to your friends for their opinion",
        ],
        answer: "C. Avoid responding and contact your bank directly using official contact details",
    },
    RawQuestion {
        prompt: "What does the concept of compound interest refer to?",
        options: [
            "A. Interest calculated on the initial principal only",
            "B. Interest calculated on the principal and previously accumulated interest",
            "C. Interest that decreases over time",
            "D. Interest paid only at the end of the investment term",
        ],
        answer: "B. Interest calculated on the principal and previously accumulated interest",
    },
    RawQuestion {
        prompt: "Which type of investment typically provides ownership in a company?",
        options: ["A. Bonds", "B. Mutual Funds", "C. Stocks", "D. ETFs"],
        answer: "C. Stocks",
    },
    RawQuestion {
        prompt: "What does an ETF stand for?",
        options: [
            "A. Exchange-Traded Fund",
            "B. Equity Transfer Fund",
            "C. Earnings Transfer Facility",
            "D. Economic Trading Firm",
        ],
        answer: "A. Exchange-Traded Fund",
    },
    RawQuestion {
        prompt: "Which of the following describes a government bond?",
        options: [
            "A. A loan you give to the government in exchange for interest payments",
            "B. Ownership of a portion of a company",
            "C. A pool of investments managed by a professional",
            "D. A speculative stock purchase",
        ],
        answer: "A. A loan you give to the government in exchange for interest payments",
    },
    RawQuestion {
        prompt: "What is a mutual fund?",
        options: [
            "A. A single stock investment",
            "B. A collection of stocks and bonds managed by a professional",
            "C. A fixed deposit account",
            "D. An individual retirement account",
        ],
        answer: "B. A collection of stocks and bonds managed by a professional",
    },
    RawQuestion {
        prompt: "What is the primary benefit of diversification in investments?",
        options: [
            "A. It guarantees high returns",
            "B. It minimizes risk by spreading investments across different assets",
            "C. It ensures tax-free returns",
            "D. It allows you to own only one type of investment",
        ],
        answer: "B. It minimizes risk by spreading investments across different assets",
    },
    RawQuestion {
        prompt: "How is interest typically paid on a bond?",
        options: [
            "A. Annually or semi-annually",
            "B. Monthly",
            "C. Only at maturity",
            "D. Weekly",
        ],
        answer: "A. Annually or semi-annually",
    },
    RawQuestion {
        prompt: "What is the difference between a stock and a bond?",
        options: [
            "A. Stocks represent ownership; bonds represent debt",
            "B. Stocks are short-term investments; bonds are long-term investments",
            "C. Stocks provide fixed interest; bonds provide dividends",
            "D. There is no difference between the two",
        ],
        answer: "A. Stocks represent ownership; bonds represent debt",
    },
    RawQuestion {
        prompt: "What is the main advantage of investing in ETFs?",
        options: [
            "A. High management fees",
            "B. Diversification at a low cost",
            "C. Guaranteed returns",
            "D. Exclusive access to private companies",
        ],
        answer: "B. Diversification at a low cost",
    },
    RawQuestion {
        prompt: "Which of the following investments is the safest?",
        options: [
            "A. Government bonds",
            "B. Individual stocks",
            "C. Mutual funds",
            "D. Cryptocurrencies",
        ],
        answer: "A. Government bonds",
    },
    RawQuestion {
        prompt: "What does the time value of money mean in financial planning?",
        options: [
            "A. Money loses value over time due to inflation",
            "B. Money available now is worth more than the same amount in the future",
            "C. Future money always has more value than present money",
            "D. Money has no value over time",
        ],
        answer: "B. Money available now is worth more than the same amount in the future",
    },
    RawQuestion {
        prompt: "What is the main goal of financial independence?",
        options: [
            "A. To rely on a single income source",
            "B. To achieve a lifestyle not dependent on active work for income",
            "C. To maximize debt for investments",
            "D. To avoid saving money",
        ],
        answer: "B. To achieve a lifestyle not dependent on active work for income",
    },
];

const ADVANCED_QUESTIONS: &[RawQuestion] = &[
    RawQuestion {
        prompt: "What is the concept of 'opportunity cost' in personal finance?",
        options: [
            "A. The actual monetary cost of an item",
            "B. The value of the next best alternative given up when making a choice",
            "C. The cost of living in a particular area",
            "D. The interest rate on a savings account",
        ],
        answer: "B. The value of the next best alternative given up when making a choice",
    },
    RawQuestion {
        prompt: "What is the 'time value of money' principle?",
        options: [
            "A. Money is worth more at night than during the day",
            "B. Money available now is worth more than the same amount in the future due to earning potential",
            "C. Time is more valuable than money",
            "D. Money loses value over weekends",
        ],
        answer: "B. Money available now is worth more than the same amount in the future due to earning potential",
    },
    RawQuestion {
        prompt: "What is the '50/30/20' budgeting rule?",
        options: [
            "A. Spend 50% on wants, 30% on needs, 20% on savings",
            "B. Spend 50% on needs, 30% on wants, 20% on savings",
            "C. Spend 50% on savings, 30% on needs, 20% on wants",
            "D. Spend 50% on investments, 30% on savings, 20% on needs",
        ],
        answer: "B. Spend 50% on needs, 30% on wants, 20% on savings",
    },
    RawQuestion {
        prompt: "What is 'lifestyle inflation'?",
        options: [
            "A. The general increase in prices over time",
            "B. Increasing living expenses as income increases",
            "C. The cost of luxury items",
            "D. The rate at which lifestyles change over time",
        ],
        answer: "B. Increasing living expenses as income increases",
    },
    RawQuestion {
        prompt: "What is the Rule of 72 used for?",
        options: [
            "A. Calculating tax deductions",
            "B. Estimating how long it takes for an investment to double",
            "C. Determining credit scores",
            "D. Computing mortgage payments",
        ],
        answer: "B. Estimating how long it takes for an investment to double",
    },
    RawQuestion {
        prompt: "What is 'dollar-cost averaging'?",
        options: [
            "A. Converting different currencies",
            "B. Investing a fixed amount regularly regardless of market conditions",
            "C. Calculating the average cost of dollars",
            "D. A method of pricing products",
        ],
        answer: "B. Investing a fixed amount regularly regardless of market conditions",
    },
    RawQuestion {
        prompt: "What is the difference between secured and unsecured debt?",
        options: [
            "A. Secured debt has higher interest rates",
            "B. Secured debt is backed by collateral while unsecured isn't",
            "C. Unsecured debt is safer",
            "D. Secured debt doesn't require repayment",
        ],
        answer: "B. Secured debt is backed by collateral while unsecured isn't",
    },
    RawQuestion {
        prompt: "What is debt-to-income (DTI) ratio?",
        options: [
            "A. Total savings divided by income",
            "B. Monthly debt payments divided by monthly gross income",
            "C. Total assets divided by total debts",
            "D. Annual income divided by total debt",
        ],
        answer: "B. Monthly debt payments divided by monthly gross income",
    },
    RawQuestion {
        prompt: "What is a 'bear market'?",
        options: [
            "A. A market where prices are rising",
            "B. A market where prices are falling by 20% or more",
            "C. A market dominated by small investors",
            "D. A market with high trading volume",
        ],
        answer: "B. A market where prices are falling by 20% or more",
    },
    RawQuestion {
        prompt: "What is 'beta' in investing?",
        options: [
            "A. The second version of an investment product",
            "B. A measure of volatility relative to the overall market",
            "C. The return on investment",
            "D. The interest rate on bonds",
        ],
        answer: "B. A measure of volatility relative to the overall market",
    },
    RawQuestion {
        prompt: "What is the '4% rule' in retirement planning?",
        options: [
            "A. Saving 4% of your annual income",
            "B. A guideline suggesting you can withdraw 4% of retirement savings annually",
            "C. Getting 4% interest on retirement accounts",
            "D. Paying 4% in retirement fees",
        ],
        answer: "B. A guideline suggesting you can withdraw 4% of retirement savings annually",
    },
    RawQuestion {
        prompt: "What is a 'catch-up contribution'?",
        options: [
            "A. Extra payments to make up for missed bills",
            "B. Additional allowed retirement contributions for people age 50 and older",
            "C. A type of investment strategy",
            "D. A penalty payment for late contributions",
        ],
        answer: "B. Additional allowed retirement contributions for people age 50 and older",
    },
    RawQuestion {
        prompt: "What is 'loan-to-value (LTV) ratio' in real estate?",
        options: [
            "A. The total value of a property",
            "B. The mortgage amount divided by the appraised property value",
            "C. The monthly mortgage payment amount",
            "D. The interest rate on a mortgage",
        ],
        answer: "B. The mortgage amount divided by the appraised property value",
    },
    RawQuestion {
        prompt: "What is 'real estate appreciation'?",
        options: [
            "A. The decrease in property value over time",
            "B. The increase in property value over time",
            "C. The cost of property maintenance",
            "D. The monthly mortgage payment",
        ],
        answer: "B. The increase in property value over time",
    },
    RawQuestion {
        prompt: "What is 'loss aversion' in behavioral finance?",
        options: [
            "A. The tendency to avoid all investments",
            "B. The psychological tendency to feel losses more strongly than equivalent gains",
            "C. The fear of making any financial decisions",
            "D. The preference for low-risk investments",
        ],
        answer: "B. The psychological tendency to feel losses more strongly than equivalent gains",
    },
    RawQuestion {
        prompt: "What is 'confirmation bias' in investing?",
        options: [
            "A. Getting confirmation from a financial advisor",
            "B. The tendency to seek information that confirms existing beliefs",
            "C. Double-checking investment decisions",
            "D. Verifying investment returns",
        ],
        answer: "B. The tendency to seek information that confirms existing beliefs",
    },
    RawQuestion {
        prompt: "What does 'ESG investing' stand for?",
        options: [
            "A. Economic Savings Growth",
            "B. Environmental, Social, and Governance",
            "C. Enhanced Security Guarantees",
            "D. Equity Savings Group",
        ],
        answer: "B. Environmental, Social, and Governance",
    },
    RawQuestion {
        prompt: "What is 'greenwashing' in investing?",
        options: [
            "A. Cleaning investment documents",
            "B. Making misleading claims about environmental benefits",
            "C. Investing in green energy",
            "D. Environmental risk assessment",
        ],
        answer: "B. Making misleading claims about environmental benefits",
    },
    RawQuestion {
        prompt: "What is a 'blockchain' in cryptocurrency?",
        options: [
            "A. A type of digital wallet",
            "B. A decentralized, distributed ledger technology",
            "C. A cryptocurrency exchange",
            "D. A type of crypto token",
        ],
        answer: "B. A decentralized, distributed ledger technology",
    },
    RawQuestion {
        prompt: "What is a 'smart contract'?",
        options: [
            "A. A legal document for cryptocurrency",
            "B. Self-executing contracts with terms directly written into code",
            "C. A contract for buying cryptocurrencies",
            "D. A type of cryptocurrency wallet",
        ],
        answer: "B. Self-executing contracts with terms directly written into code",
    },
    RawQuestion {
        prompt: "What is 'DeFi' in cryptocurrency?",
        options: [
            "A. A type of cryptocurrency",
            "B. Decentralized Finance - financial services using blockchain",
            "C. A digital wallet",
            "D. A cryptocurrency exchange",
        ],
        answer: "B. Decentralized Finance - financial services using blockchain",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn catalog_is_valid() {
        validate();
    }

    #[test]
    fn set_sizes_match_the_catalog() {
        assert_eq!(questions(Level::Basic).len(), 17);
        assert_eq!(questions(Level::Advanced).len(), 21);
    }

    #[test]
    fn questions_returns_independent_copies() {
        let mut first = questions(Level::Basic);
        first[0].prompt.clear();
        first.pop();

        let second = questions(Level::Basic);
        assert_eq!(second.len(), 17);
        assert!(!second[0].prompt.is_empty());
    }

    #[test]
    fn ids_are_unique_across_both_sets() {
        let mut ids: Vec<u32> = questions(Level::Basic)
            .iter()
            .chain(questions(Level::Advanced).iter())
            .map(|q| q.id)
            .collect();
        let total = ids.len();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), total);
    }
}
