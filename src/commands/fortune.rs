//! Magic 8-Ball answers

use rand::Rng;

pub const USAGE: &str = "Usage: 8ball <yes/no style question>";

pub const ANSWERS: [&str; 17] = [
    "It is certain.",
    "Without a doubt.",
    "You may rely on it.",
    "Yes \u{2013} definitely.",
    "Most likely.",
    "Outlook good.",
    "Yes.",
    "Signs point to yes.",
    "Reply hazy, try again.",
    "Ask again later.",
    "Better not tell you now.",
    "Cannot predict now.",
    "Concentrate and ask again.",
    "Don't count on it.",
    "My reply is no.",
    "Outlook not so good.",
    "Very doubtful.",
];

/// Whether `question` has at least two words
pub fn is_question(question: &str) -> bool {
    question.split_whitespace().nth(1).is_some()
}

/// Uniformly chosen answer
pub fn answer<R: Rng + ?Sized>(rng: &mut R) -> &'static str {
    ANSWERS[rng.gen_range(0..ANSWERS.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_question() {
        assert!(!is_question(""));
        assert!(!is_question("tomorrow?"));
        assert!(!is_question("  tomorrow?  "));
        assert!(is_question("will it rain?"));
    }

    #[test]
    fn test_answer_from_fixed_set() {
        let mut rng = StdRng::seed_from_u64(7);
        for _ in 0..50 {
            assert!(ANSWERS.contains(&answer(&mut rng)));
        }
    }

    #[test]
    fn test_answers_cover_set() {
        let mut rng = StdRng::seed_from_u64(42);
        let mut seen = std::collections::HashSet::new();
        for _ in 0..2000 {
            seen.insert(answer(&mut rng));
        }
        assert_eq!(seen.len(), ANSWERS.len());
    }
}
