//! Renderer contract: what a front-end shows for a given [`RequestState`].

use std::fmt;

use crate::{
    config::Config,
    error::GENERIC_FAILURE_MESSAGE,
    models::{Phase, RankedResult, RequestState},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RenderOptions {
    pub description_max_chars: usize,
}

impl From<&Config> for RenderOptions {
    fn from(config: &Config) -> Self {
        Self {
            description_max_chars: config.description_max_chars,
        }
    }
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self::from(&Config::default())
    }
}

/// One recommendation card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    pub rank: u8,
    pub badge: String,
    /// Set on the first card only
    pub top_pick: bool,
    pub product_name: String,
    pub description: String,
    pub source_link: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum View {
    /// Never searched
    Prompt,
    Busy { keyword: String },
    ErrorPanel { message: String },
    /// Searched, nothing found
    NoResults { keyword: String },
    Cards(Vec<Card>),
}

pub fn render(state: &RequestState, options: &RenderOptions) -> View {
    match state.phase() {
        Phase::Idle => View::Prompt,
        Phase::Loading => View::Busy {
            keyword: state.keyword().to_string(),
        },
        Phase::Error => View::ErrorPanel {
            message: state
                .error_message()
                .unwrap_or(GENERIC_FAILURE_MESSAGE)
                .to_string(),
        },
        Phase::Success if state.results().is_empty() => View::NoResults {
            keyword: state.keyword().to_string(),
        },
        Phase::Success => View::Cards(
            state
                .results()
                .iter()
                .enumerate()
                .map(|(index, result)| card(index, result, options))
                .collect(),
        ),
    }
}

fn card(index: usize, result: &RankedResult, options: &RenderOptions) -> Card {
    Card {
        rank: result.rank(),
        badge: rank_badge(result.rank()),
        top_pick: index == 0,
        product_name: result.product_name().to_string(),
        description: truncate(result.description(), options.description_max_chars),
        source_link: result.source_link().to_string(),
    }
}

fn rank_badge(rank: u8) -> String {
    match rank {
        1 => "🥇".to_string(),
        2 => "🥈".to_string(),
        3 => "🥉".to_string(),
        other => format!("#{}", other),
    }
}

/// Cuts on a char boundary and appends an ellipsis
fn truncate(text: &str, max_chars: usize) -> String {
    if text.chars().count() <= max_chars {
        return text.to_string();
    }
    let mut cut: String = text.chars().take(max_chars).collect();
    cut.truncate(cut.trim_end().len());
    cut.push('…');
    cut
}

impl fmt::Display for View {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            View::Prompt => write!(f, "🔍 Enter a product keyword to start searching"),
            View::Busy { keyword } => write!(
                f,
                "Analyzing the web for the best \"{}\"... this can take 30-60 seconds",
                keyword
            ),
            View::ErrorPanel { message } => {
                write!(f, "❌ Failed to get recommendations\n{}", message)
            }
            View::NoResults { keyword } => {
                write!(f, "No recommendations found for \"{}\"", keyword)
            }
            View::Cards(cards) => {
                for (i, card) in cards.iter().enumerate() {
                    if i > 0 {
                        writeln!(f)?;
                    }
                    write!(f, "{} {}", card.badge, card.product_name)?;
                    if card.top_pick {
                        write!(f, "  [top pick]")?;
                    }
                    writeln!(f)?;
                    if !card.description.is_empty() {
                        writeln!(f, "   {}", card.description)?;
                    }
                    writeln!(f, "   {}", card.source_link)?;
                }
                Ok(())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::parse_collection;
    use serde_json::json;

    fn success_state(results: Vec<RankedResult>) -> RequestState {
        let mut state = RequestState::default();
        state.begin("headphones".to_string(), 1);
        state.succeed(results);
        state
    }

    #[test]
    fn test_idle_and_empty_success_render_differently() {
        let options = RenderOptions::default();
        assert_eq!(render(&RequestState::default(), &options), View::Prompt);
        assert_eq!(
            render(&success_state(Vec::new()), &options),
            View::NoResults {
                keyword: "headphones".to_string()
            }
        );
    }

    #[test]
    fn test_loading_renders_busy() {
        let mut state = RequestState::default();
        state.begin("laptop".to_string(), 1);
        assert_eq!(
            render(&state, &RenderOptions::default()),
            View::Busy {
                keyword: "laptop".to_string()
            }
        );
    }

    #[test]
    fn test_error_renders_message() {
        let mut state = RequestState::default();
        state.begin("laptop".to_string(), 1);
        state.fail("no results".to_string());
        let view = render(&state, &RenderOptions::default());
        assert_eq!(
            view,
            View::ErrorPanel {
                message: "no results".to_string()
            }
        );
        assert!(view.to_string().contains("no results"));
    }

    #[test]
    fn test_cards_follow_rank_order() {
        let results = parse_collection(&[
            json!({ "rank": 2, "product_name": "B", "description": "b", "source_link": "https://b" }),
            json!({ "rank": 1, "product_name": "A", "description": "a", "source_link": "https://a" }),
            json!({ "rank": 3, "product_name": "C", "description": "c", "source_link": "https://c" }),
        ])
        .unwrap();

        let View::Cards(cards) = render(&success_state(results), &RenderOptions::default()) else {
            panic!("expected cards");
        };
        let names: Vec<&str> = cards.iter().map(|c| c.product_name.as_str()).collect();
        assert_eq!(names, vec!["A", "B", "C"]);
        assert_eq!(cards[0].badge, "🥇");
        assert!(cards[0].top_pick);
        assert!(!cards[1].top_pick);
        assert_eq!(cards[2].badge, "🥉");
    }

    #[test]
    fn test_description_truncated_only_when_rendered() {
        let long = "耳机".repeat(20);
        let results = parse_collection(&[json!({
            "rank": 1, "product_name": "A", "description": long, "source_link": "x"
        })])
        .unwrap();
        let state = success_state(results);

        let View::Cards(cards) = render(&state, &RenderOptions { description_max_chars: 5 }) else {
            panic!("expected cards");
        };
        assert_eq!(cards[0].description, "耳机耳机耳…");
        assert_eq!(state.results()[0].description(), long);
    }

    #[test]
    fn test_truncate_short_text_untouched() {
        assert_eq!(truncate("short", 10), "short");
        assert_eq!(truncate("two words", 4), "two…");
    }
}
