use rand::seq::SliceRandom;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    pub text: String,
    pub author: String,
}

const QUOTES: [(&str, &str); 10] = [
    ("The only way to do great work is to love what you do.", "Steve Jobs"),
    ("Innovation distinguishes between a leader and a follower.", "Steve Jobs"),
    ("Life is what happens when you're busy making other plans.", "John Lennon"),
    ("The future belongs to those who believe in the beauty of their dreams.", "Eleanor Roosevelt"),
    ("It is during our darkest moments that we must focus to see the light.", "Aristotle"),
    ("Whoever is happy will make others happy too.", "Anne Frank"),
    ("Do not dwell in the past, do not dream of the future, concentrate the mind on the present moment.", "Buddha"),
    ("Life is really simple, but we insist on making it complicated.", "Confucius"),
    ("May you live every day of your life.", "Jonathan Swift"),
    ("Success is not final, failure is not fatal: it is the courage to continue that counts.", "Winston Churchill"),
];

/// Сервис цитат: фиксированный список в памяти, без внешних запросов
pub struct QuoteService {
    quotes: Vec<Quote>,
}

impl QuoteService {
    pub fn new() -> Self {
        Self::with_quotes(
            QUOTES
                .iter()
                .map(|(text, author)| Quote {
                    text: text.to_string(),
                    author: author.to_string(),
                })
                .collect(),
        )
    }

    pub fn with_quotes(quotes: Vec<Quote>) -> Self {
        Self { quotes }
    }

    /// Возвращает случайную цитату (равновероятно, каждый вызов независим)
    pub fn random_quote(&self) -> Option<&Quote> {
        self.quotes.choose(&mut rand::thread_rng())
    }

    pub fn all(&self) -> &[Quote] {
        &self.quotes
    }
}
