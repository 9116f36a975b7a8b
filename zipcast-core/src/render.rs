//! Display state of the form page and its rendering.
//!
//! A [`Page`] holds the two output regions of the form: the error message
//! region (hidden by default) and the forecast region. Every render replaces
//! what was there before, so rendering the same forecast twice leaves the
//! page exactly as rendering it once.

use std::fmt;

use maud::html;
use serde::Serialize;

use crate::{ForecastDay, Icon, date::weekday_name};

/// Number of forecast days shown as cards.
pub const CARD_COUNT: usize = 3;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ErrorRegion {
    pub visible: bool,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub day_label: String,
    pub icon: Icon,
    pub description: String,
    pub high: i64,
    pub low: i64,
    /// `<high>° / <low>° F`
    pub high_low: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForecastView {
    pub title: String,
    pub cards: Vec<Card>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Page {
    pub error: ErrorRegion,
    pub forecast: Option<ForecastView>,
}

impl Page {
    /// Clear the forecast output and show `message` in the error region.
    pub fn render_error(&mut self, message: &str) {
        self.forecast = None;
        self.error = ErrorRegion { visible: true, message: message.to_string() };
    }

    pub fn hide_error(&mut self) {
        self.error.visible = false;
    }

    /// Replace the forecast output with cards for the first three `days`.
    pub fn render_forecast(&mut self, city: &str, days: &[ForecastDay]) {
        self.render_forecast_with(city, days, weekday_name);
    }

    fn render_forecast_with(
        &mut self,
        city: &str,
        days: &[ForecastDay],
        weekday: impl Fn(i64) -> String,
    ) {
        let cards = days
            .iter()
            .take(CARD_COUNT)
            .enumerate()
            .map(|(i, day)| {
                let high = round_degrees(day.temperature_high);
                let low = round_degrees(day.temperature_low);
                Card {
                    day_label: if i == 0 { "Today".to_string() } else { weekday(day.time) },
                    icon: day.icon,
                    description: day.icon.description().to_string(),
                    high,
                    low,
                    high_low: high_low(high, low),
                }
            })
            .collect();

        self.forecast = Some(ForecastView { title: format!("weather forecast for {city}"), cards });
    }

    /// Serialize the page as the HTML element tree of the form's output regions.
    pub fn to_html(&self) -> String {
        let display = if self.error.visible { "display: block" } else { "display: none" };

        html! {
            div id="errorMsg" style=(display) {
                @for (i, line) in self.error.message.split('\n').enumerate() {
                    @if i > 0 { br; }
                    (line)
                }
            }
            div id="forecast" {
                @if let Some(view) = &self.forecast {
                    h1 { (view.title) }
                    div id="cardContainer" {
                        @for card in &view.cards {
                            div class="card" {
                                h2 class="day" { (card.day_label) ":" }
                                div class="innerCard" {
                                    img src=(card.icon.image()) alt=(card.icon.as_str());
                                    div class="innerWeather" {
                                        p { (card.description) }
                                        p { strong { (card.high) "°" } " / " (card.low) "° F" }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
        .into_string()
    }
}

impl fmt::Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.error.visible {
            writeln!(f, "{}", self.error.message)?;
        }

        if let Some(view) = &self.forecast {
            writeln!(f, "{}", view.title)?;
            for card in &view.cards {
                writeln!(f)?;
                writeln!(f, "  {}:", card.day_label)?;
                writeln!(f, "    {}", card.description)?;
                writeln!(f, "    {}", card.high_low)?;
            }
        }

        Ok(())
    }
}

fn high_low(high: i64, low: i64) -> String {
    format!("{high}° / {low}° F")
}

/// Rounds half away from zero.
fn round_degrees(t: f64) -> i64 {
    // `as` saturates, and NaN becomes 0
    t.round() as i64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::date::weekday_name_in;
    use chrono::Utc;

    const SUNDAY: i64 = 1_623_542_400;
    const DAY: i64 = 86_400;

    fn day(time: i64, icon: Icon, high: f64, low: f64) -> ForecastDay {
        ForecastDay { time, icon, temperature_high: high, temperature_low: low }
    }

    fn sample_days() -> Vec<ForecastDay> {
        vec![
            day(SUNDAY, Icon::Sunny, 80.0, 60.0),
            day(SUNDAY + DAY, Icon::Rain, 70.0, 50.0),
            day(SUNDAY + 2 * DAY, Icon::Cloudy, 65.0, 45.0),
            day(SUNDAY + 3 * DAY, Icon::Snow, 30.0, 20.0),
        ]
    }

    fn render_utc(page: &mut Page, city: &str, days: &[ForecastDay]) {
        page.render_forecast_with(city, days, |ts| weekday_name_in(ts, &Utc));
    }

    #[test]
    fn renders_three_cards_in_order() {
        let mut page = Page::default();
        render_utc(&mut page, "Testville", &sample_days());

        let view = page.forecast.as_ref().expect("forecast rendered");
        assert_eq!(view.title, "weather forecast for Testville");
        assert_eq!(view.cards.len(), 3);

        assert_eq!(view.cards[0].day_label, "Today");
        assert_eq!(view.cards[0].description, "Clear");
        assert_eq!(view.cards[0].high_low, "80° / 60° F");

        assert_eq!(view.cards[1].day_label, "Monday");
        assert_eq!(view.cards[1].description, "Rainy");
        assert_eq!(view.cards[2].day_label, "Tuesday");
        assert_eq!(view.cards[2].icon, Icon::Cloudy);
    }

    #[test]
    fn fewer_days_than_cards() {
        let mut page = Page::default();
        render_utc(&mut page, "Short", &sample_days()[..1]);
        assert_eq!(page.forecast.unwrap().cards.len(), 1);
    }

    #[test]
    fn temperatures_round_to_nearest() {
        assert_eq!(round_degrees(79.5), 80);
        assert_eq!(round_degrees(60.49), 60);
        assert_eq!(round_degrees(-0.4), 0);
        assert_eq!(round_degrees(-2.5), -3);
        assert_eq!(high_low(80, -3), "80° / -3° F");
    }

    #[test]
    fn error_clears_forecast_and_shows_message() {
        let mut page = Page::default();
        render_utc(&mut page, "Testville", &sample_days());

        page.render_error("no location found");

        assert!(page.forecast.is_none());
        assert!(page.error.visible);
        assert_eq!(page.error.message, "no location found");
    }

    #[test]
    fn rendering_twice_equals_rendering_once() {
        let mut once = Page::default();
        render_utc(&mut once, "Testville", &sample_days());

        let mut twice = Page::default();
        render_utc(&mut twice, "Testville", &sample_days());
        render_utc(&mut twice, "Testville", &sample_days());

        assert_eq!(once, twice);
        assert_eq!(once.to_html(), twice.to_html());
    }

    #[test]
    fn html_mirrors_card_markup() {
        let mut page = Page::default();
        render_utc(&mut page, "Testville", &sample_days());
        let html = page.to_html();

        assert!(html.starts_with(r#"<div id="errorMsg" style="display: none"></div>"#));
        assert!(html.contains("<h1>weather forecast for Testville</h1>"));
        assert_eq!(html.matches(r#"<div class="card">"#).count(), 3);
        assert!(html.contains(r#"<h2 class="day">Today:</h2>"#));
        assert!(html.contains(r#"<img src="img/sunny.png" alt="sunny">"#));
        assert!(html.contains("<p>Clear</p><p><strong>80°</strong> / 60° F</p>"));
        assert!(html.ends_with("</div></div></div></div></div>"));
    }

    #[test]
    fn html_escapes_and_breaks_lines() {
        let mut page = Page::default();
        page.render_error("Invalid <zip>\nTry again");

        let html = page.to_html();
        assert!(html.contains(r#"style="display: block">Invalid &lt;zip&gt;<br>Try again</div>"#));
        assert!(html.ends_with(r#"<div id="forecast"></div>"#));
    }

    #[test]
    fn html_escapes_city_name() {
        let mut page = Page::default();
        render_utc(&mut page, "<script>&\"", &sample_days()[..1]);

        let html = page.to_html();
        assert!(html.contains("<h1>weather forecast for &lt;script&gt;&amp;&quot;</h1>"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn text_output() {
        let mut page = Page::default();
        render_utc(&mut page, "Testville", &sample_days());
        let text = page.to_string();

        assert!(text.starts_with("weather forecast for Testville\n"));
        assert!(text.contains("  Today:\n    Clear\n    80° / 60° F\n"));
        assert!(text.contains("  Monday:\n    Rainy\n"));
    }
}
