pub mod config;
pub mod console;

use std::{fmt::Display, str::FromStr};

use chrono::{Local, NaiveDate};
use fitguide_chart::Plotter;
use fitguide_model::{entry::LogEntry, metric::Metric, plan::PlanType, user::User};
use fitguide_store::{
    diet::DietPlans,
    logbook::{self, Logbook},
};
use log::{debug, error, info, warn};
use strum::IntoEnumIterator;

use crate::console::Console;

const INVALID_CHOICE: &str = "Invalid choice. Please try again.";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Action {
    GetDietPlan,
    RecordWeight,
    RecordCalories,
    RecordExercise,
    View(Metric),
    Plot(Metric),
    Exit,
}

const MENU: [(Action, &str); 12] = [
    (Action::GetDietPlan, "Get a Diet Plan"),
    (Action::RecordWeight, "Record Weight and BMI"),
    (Action::RecordCalories, "Record Calories Intake"),
    (Action::RecordExercise, "Record Exercise"),
    (Action::View(Metric::Weight), "View Weight Log"),
    (Action::View(Metric::Bmi), "View BMI Log"),
    (Action::View(Metric::Calories), "View Calorie Log"),
    (Action::View(Metric::Exercise), "View Exercise Log"),
    (Action::Plot(Metric::Weight), "Plot Weight vs Date"),
    (Action::Plot(Metric::Bmi), "Plot BMI vs Date"),
    (Action::Plot(Metric::Calories), "Plot Calories vs Date"),
    (Action::Exit, "Exit"),
];

impl Action {
    /// Parse a 1-based menu position.
    pub fn from_selector(selector: &str) -> Option<Self> {
        selector
            .trim()
            .parse::<usize>()
            .ok()
            .and_then(|n| n.checked_sub(1))
            .and_then(|i| MENU.get(i))
            .map(|(action, _)| *action)
    }
}

fn menu_prompt() -> String {
    let mut prompt = String::from("Health and Fitness Guide\n");
    for (i, (_, label)) in MENU.iter().enumerate() {
        prompt.push_str(&format!("{:>2}. {}\n", i + 1, label));
    }
    prompt.push_str("Choose an action:");
    prompt
}

fn plan_prompt() -> String {
    let mut prompt = String::from("Diet plan types\n");
    for plan_type in PlanType::iter() {
        prompt.push_str(&format!("{}. {}\n", plan_type as u8, plan_type.description()));
    }
    prompt.push_str("Choose a plan type:");
    prompt
}

/// Strictly positive number, anything else counts as no answer.
fn parse_positive<T>(answer: &str) -> Option<T>
where
    T: FromStr + PartialOrd + Default,
{
    answer
        .trim()
        .parse::<T>()
        .ok()
        .filter(|v| *v > T::default())
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub struct App {
    console: Box<dyn Console>,
    logbook: Box<dyn Logbook>,
    plotter: Box<dyn Plotter>,
    diet_plans: DietPlans,
}

impl App {
    pub fn new(
        console: Box<dyn Console>,
        logbook: Box<dyn Logbook>,
        plotter: Box<dyn Plotter>,
        diet_plans: DietPlans,
    ) -> Self {
        Self {
            console,
            logbook,
            plotter,
            diet_plans,
        }
    }

    pub fn run(&mut self) {
        let Some(mut user) = self.create_user() else {
            info!("User data incomplete, terminating");
            self.console.show(
                "Error",
                "User data incomplete. Please restart the application.",
            );
            return;
        };
        info!("BMI {:.2}, status {}", user.bmi(), user.status());
        self.console.show(
            "User Info",
            &format!(
                "Hello, User!\nYour BMI is: {:.2}\nStatus: {}",
                user.bmi(),
                user.status()
            ),
        );

        let prompt = menu_prompt();
        while let Some(answer) = self.console.ask(&prompt) {
            if answer.trim().is_empty() {
                continue;
            }
            match Action::from_selector(&answer) {
                Some(Action::Exit) => break,
                Some(action) => {
                    debug!("Selected {:?}", action);
                    self.dispatch(&mut user, action);
                }
                None => self.console.show("Error", INVALID_CHOICE),
            }
        }
        info!("Exiting");
    }

    fn create_user(&mut self) -> Option<User> {
        let weight = self.ask_positive::<f64>("Enter your weight (in kg):");
        let height = self.ask_positive::<f64>("Enter your height (in meters):");
        User::new(weight?, height?).ok()
    }

    pub fn dispatch(&mut self, user: &mut User, action: Action) {
        match action {
            Action::GetDietPlan => self.get_diet_plan(user),
            Action::RecordWeight => self.record_weight(user),
            Action::RecordCalories => self.record_calories(),
            Action::RecordExercise => self.record_exercise(),
            Action::View(metric) => self.view(metric),
            Action::Plot(metric) => self.plot(metric),
            Action::Exit => {}
        }
    }

    fn get_diet_plan(&mut self, user: &User) {
        let choice = self.console.ask(&plan_prompt());
        let Some(plan_type) = choice.as_deref().and_then(PlanType::from_selector) else {
            self.console.show("Error", INVALID_CHOICE);
            return;
        };

        match self.diet_plans.get_plan(user.status(), plan_type) {
            Ok(plan) => {
                let message = format!("Recommended Plan: {}", plan);
                self.console.show("Diet Plan", &message);
            }
            Err(e) => self.report(e),
        }
    }

    fn record_weight(&mut self, user: &mut User) {
        let Some(weight) = self.ask_positive::<f64>("Enter your weight in kgs:") else {
            return;
        };
        if let Err(e) = user.set_weight(weight) {
            debug!("Ignoring weight: {}", e);
            return;
        }
        info!("Weight {} kg, BMI {:.2}, status {}", weight, user.bmi(), user.status());

        let date = today();
        let result = self
            .logbook
            .append(Metric::Weight, &LogEntry::new(date, format!("{:?} kg", weight)))
            .and_then(|_| {
                self.logbook
                    .append(Metric::Bmi, &LogEntry::new(date, format!("{:.2}", user.bmi())))
            });
        match result {
            Ok(()) => self
                .console
                .show("Success", "Weight and BMI recorded successfully"),
            Err(e) => self.report(e),
        }
    }

    fn record_calories(&mut self) {
        let Some(calories) =
            self.ask_positive::<u32>("Enter the number of calories consumed today:")
        else {
            return;
        };

        let entry = LogEntry::new(today(), format!("{} kcal", calories));
        match self.logbook.append(Metric::Calories, &entry) {
            Ok(()) => self.console.show("Success", "Calories recorded successfully"),
            Err(e) => self.report(e),
        }
    }

    fn record_exercise(&mut self) {
        let exercise = self.console.ask("Enter the type of exercise:");
        let duration =
            self.ask_positive::<u32>("Enter the duration of exercise in minutes:");
        let (Some(exercise), Some(duration)) = (exercise, duration) else {
            return;
        };
        let exercise = exercise.trim();
        if exercise.is_empty() {
            return;
        }

        let entry = LogEntry::new(today(), format!("{} for {} minutes", exercise, duration));
        match self.logbook.append(Metric::Exercise, &entry) {
            Ok(()) => self.console.show("Success", "Exercise recorded successfully"),
            Err(e) => self.report(e),
        }
    }

    fn view(&mut self, metric: Metric) {
        match self.logbook.read_text(metric) {
            Ok(text) => self.console.show("Recorded Data", &text),
            Err(logbook::Error::NoData(_)) => self.console.show("Error", "No data recorded yet."),
            Err(e) => self.report(e),
        }
    }

    fn plot(&mut self, metric: Metric) {
        let Some(y_label) = metric.axis_label() else {
            self.report(fitguide_chart::Error::NotPlottable(metric));
            return;
        };
        let no_log = format!(
            "No {} log found. Please record some data first.",
            metric.title().to_lowercase()
        );

        let series = match self.logbook.read_series(metric) {
            Ok(series) => series,
            Err(logbook::Error::NoData(_)) => {
                self.console.show("Error", &no_log);
                return;
            }
            Err(e) => {
                self.report(e);
                return;
            }
        };

        if !series.rejected.is_empty() {
            warn!(
                "{} malformed {} entries skipped",
                series.rejected.len(),
                metric
            );
            let lines = series
                .rejected
                .iter()
                .map(ToString::to_string)
                .collect::<Vec<_>>()
                .join("\n");
            self.console.show(
                "Warning",
                &format!("Skipped {} malformed entries:\n{}", series.rejected.len(), lines),
            );
        }
        if series.is_empty() {
            self.console.show("Error", &no_log);
            return;
        }

        match self.plotter.plot(metric, &series, y_label, metric.title()) {
            Ok(path) => {
                let message = format!("{} chart saved to {}", metric.title(), path.display());
                self.console.show("Plot", &message);
            }
            Err(e) => self.report(e),
        }
    }

    fn ask_positive<T>(&mut self, prompt: &str) -> Option<T>
    where
        T: FromStr + PartialOrd + Default,
    {
        self.console
            .ask(prompt)
            .as_deref()
            .and_then(parse_positive)
    }

    fn report(&mut self, e: impl Display) {
        error!("{}", e);
        self.console.show("Error", &e.to_string());
    }
}
