/// A word problem with its known numeric answer.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Problem {
    pub text: &'static str,
    pub correct_answer: f64,
}

impl Problem {
    pub const fn new(text: &'static str, correct_answer: f64) -> Self {
        Self { text, correct_answer }
    }

    pub fn prompt(&self) -> String {
        build_prompt(self.text)
    }
}

pub fn build_prompt(problem: &str) -> String {
    format!("Solve: {}\n\nLet's think step-by-step:", problem)
}

/// GRE-style arithmetic benchmark, evaluated in this order.
pub const PROBLEMS: [Problem; 10] = [
    Problem::new(
        "A store sold 450 books Monday, 325 Tuesday, 275 Wednesday. Thursday it sold 50 more than Wednesday. Total books sold?",
        1100.0,
    ),
    Problem::new(
        "Sarah has $120. Spends 1/4 on jacket, 1/3 of remaining on shoes. Money left?",
        60.0,
    ),
    Problem::new(
        "Train travels 240 miles in 4 hours. How many miles in 7 hours at same speed?",
        420.0,
    ),
    Problem::new(
        "Class of 30: 18 girls, rest boys. 2/3 girls and 3/4 boys play sports. How many play sports?",
        21.0,
    ),
    Problem::new(
        "Rectangle 15cm x 8cm. Length +20%, width -25%. New area?",
        108.0,
    ),
    Problem::new(
        "Tom scored 85, 92, 78 on three tests. What score needed on fourth test for 88 average?",
        97.0,
    ),
    Problem::new(
        "Item costs $75, 20% discount, then 6% tax on discounted price. Total paid?",
        63.6,
    ),
    Problem::new(
        "Pool filled by pipe A in 6 hours, pipe B in 8 hours. Both together?",
        3.43,
    ),
    Problem::new(
        "Car to motorcycle ratio 5:2. If 35 cars, how many motorcycles?",
        14.0,
    ),
    Problem::new(
        "Profit increased from $50,000 to $65,000. Percentage increase?",
        30.0,
    ),
];
