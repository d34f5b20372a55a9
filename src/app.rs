use crate::error::Result;
use crate::models::DaySummary;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Loading,
    Error,
    Success,
}

/// What the forecast screen is showing
#[derive(Debug, Clone, Default)]
pub struct ForecastView {
    pub loading: bool,
    pub error: String,
    pub forecast: Vec<DaySummary>,
}

impl ForecastView {
    pub fn begin_fetch(&mut self) {
        self.loading = true;
    }

    pub fn finish(&mut self, result: Result<Vec<DaySummary>>) {
        match result {
            Ok(days) => {
                self.forecast = days;
                self.error.clear();
            }
            Err(e) => {
                self.error = e.user_message();
            }
        }
        self.loading = false;
    }

    pub fn phase(&self) -> Phase {
        if self.loading {
            Phase::Loading
        } else if !self.error.is_empty() {
            Phase::Error
        } else {
            Phase::Success
        }
    }
}

pub struct ListState {
    pub scroll: usize,
}

impl ListState {
    pub fn new() -> Self {
        Self { scroll: 0 }
    }

    pub fn next(&mut self, max: usize) {
        if max > 0 && self.scroll < max - 1 {
            self.scroll += 1;
        }
    }

    pub fn prev(&mut self) {
        if self.scroll > 0 {
            self.scroll -= 1;
        }
    }
}

pub struct App {
    pub should_quit: bool,
    pub location_name: String,

    pub view: ForecastView,
    pub list_state: ListState,

    // Spinner frame counter
    pub tick: usize,
    pub needs_fetch: bool,
}

impl App {
    /// A fresh screen starts in the loading state with its first fetch queued.
    pub fn new(location_name: impl Into<String>) -> Self {
        Self {
            should_quit: false,
            location_name: location_name.into(),
            view: ForecastView {
                loading: true,
                ..ForecastView::default()
            },
            list_state: ListState::new(),
            tick: 0,
            needs_fetch: true,
        }
    }

    pub fn quit(&mut self) {
        self.should_quit = true;
    }

    /// Queue the same request again. Ignored while a fetch is in flight.
    pub fn request_retry(&mut self) -> bool {
        if self.view.loading {
            tracing::debug!("retry ignored, fetch already in flight");
            return false;
        }
        self.needs_fetch = true;
        true
    }

    pub fn start_fetch(&mut self) {
        self.needs_fetch = false;
        self.view.begin_fetch();
    }

    pub fn apply_result(&mut self, result: Result<Vec<DaySummary>>) {
        if let Err(ref e) = result {
            tracing::error!("Forecast load failed: {}", e);
        }
        self.view.finish(result);
        self.list_state = ListState::new();
    }

    pub fn on_tick(&mut self) {
        self.tick = self.tick.wrapping_add(1);
    }

    pub fn scroll_down(&mut self) {
        let count = self.view.forecast.len();
        self.list_state.next(count);
    }

    pub fn scroll_up(&mut self) {
        self.list_state.prev();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::{PronosticoError, FALLBACK_ERROR_MESSAGE};
    use crate::models::{ForecastSample, WeatherCondition};
    use chrono::NaiveDate;

    fn days(count: u32) -> Vec<DaySummary> {
        (1..=count)
            .map(|d| {
                let date = NaiveDate::from_ymd_opt(2024, 5, d).unwrap();
                let sample = ForecastSample {
                    dt_txt: format!("2024-05-{:02} 00:00:00", d),
                    temp_max: 20.0,
                    temp_min: 10.0,
                    pop: 0.0,
                    condition: WeatherCondition {
                        icon: "01d".into(),
                        description: "cielo claro".into(),
                    },
                };
                DaySummary::seed(date, &sample)
            })
            .collect()
    }

    #[test]
    fn new_app_is_loading_with_fetch_queued() {
        let app = App::new("Huejutla de Reyes");
        assert_eq!(app.view.phase(), Phase::Loading);
        assert!(app.needs_fetch);
    }

    #[test]
    fn success_clears_previous_error() {
        let mut view = ForecastView {
            error: "old".into(),
            ..ForecastView::default()
        };
        view.begin_fetch();
        view.finish(Ok(days(3)));
        assert_eq!(view.phase(), Phase::Success);
        assert!(view.error.is_empty());
        assert_eq!(view.forecast.len(), 3);
    }

    #[test]
    fn failure_sets_user_message() {
        let mut view = ForecastView::default();
        view.begin_fetch();
        view.finish(Err(PronosticoError::Api {
            status: 401,
            message: Some("X".into()),
        }));
        assert_eq!(view.phase(), Phase::Error);
        assert_eq!(view.error, "X");

        view.begin_fetch();
        view.finish(Err(PronosticoError::InvalidData("boom".into())));
        assert_eq!(view.error, FALLBACK_ERROR_MESSAGE);
    }

    #[test]
    fn loading_takes_precedence_over_error() {
        let view = ForecastView {
            loading: true,
            error: "X".into(),
            forecast: Vec::new(),
        };
        assert_eq!(view.phase(), Phase::Loading);
    }

    #[test]
    fn retry_is_single_flight() {
        let mut app = App::new("Huejutla de Reyes");
        app.start_fetch();
        assert!(!app.request_retry());
        assert!(!app.needs_fetch);

        app.apply_result(Err(PronosticoError::InvalidData("boom".into())));
        assert!(app.request_retry());
        assert!(app.needs_fetch);

        app.start_fetch();
        assert_eq!(app.view.phase(), Phase::Loading);
    }

    #[test]
    fn scroll_is_bounded_by_card_count() {
        let mut app = App::new("Huejutla de Reyes");
        app.start_fetch();
        app.apply_result(Ok(days(2)));

        app.scroll_down();
        app.scroll_down();
        assert_eq!(app.list_state.scroll, 1);
        app.scroll_up();
        app.scroll_up();
        assert_eq!(app.list_state.scroll, 0);
    }
}
