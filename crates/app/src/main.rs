use std::fmt;
use std::sync::Arc;

use pathway_core::model::{LearningPath, LearningStyle, UserProfile};
use pathway_core::onboarding::{FormState, OnboardingWizard, StepErrors, WizardOutcome};
use pathway_core::{PathNormalizer, ProgressStore, QuizSession};
use services::{ApiConfigDraft, HttpLearningPathApi, PathService, QuizService};

#[derive(Debug)]
enum ArgsError {
    MissingValue { flag: &'static str },
    MissingArg { name: &'static str },
    UnknownArg(String),
    InvalidStyle { raw: String },
    InvalidWeek { raw: String },
}

impl fmt::Display for ArgsError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ArgsError::MissingValue { flag } => write!(f, "{flag} requires a value"),
            ArgsError::MissingArg { name } => write!(f, "missing argument: {name}"),
            ArgsError::UnknownArg(arg) => write!(f, "unknown argument: {arg}"),
            ArgsError::InvalidStyle { raw } => write!(f, "invalid --style value: {raw}"),
            ArgsError::InvalidWeek { raw } => write!(f, "invalid --quiz-week value: {raw}"),
        }
    }
}

impl std::error::Error for ArgsError {}

fn require_value(
    args: &mut impl Iterator<Item = String>,
    flag: &'static str,
) -> Result<String, ArgsError> {
    args.next().ok_or(ArgsError::MissingValue { flag })
}

fn print_usage() {
    eprintln!("Usage:");
    eprintln!("  app generate --skills <a,b> --goal <text> --hours <n> --weeks <n>");
    eprintln!("               [--style visual|hands-on|reading] [--api-url <url>] [--quiz-week <n>]");
    eprintln!("  app normalize <response.json> [--goal <text>]");
    eprintln!();
    eprintln!("Environment:");
    eprintln!("  PATHWAY_API_URL, PATHWAY_AUTH_TOKEN, PATHWAY_TIMEOUT_SECS, RUST_LOG");
}

struct GenerateArgs {
    form: FormState,
    api: ApiConfigDraft,
    quiz_week: Option<u32>,
}

impl GenerateArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut form = FormState::new();
        let mut api = ApiConfigDraft::from_env();
        let mut quiz_week = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--skills" => {
                    for skill in require_value(args, "--skills")?.split(',') {
                        form.add_skill(skill);
                    }
                }
                "--goal" => form.target_goal = require_value(args, "--goal")?,
                "--hours" => {
                    form.hours_per_week = FormState::parse_number(&require_value(args, "--hours")?);
                }
                "--weeks" => {
                    form.duration_weeks = FormState::parse_number(&require_value(args, "--weeks")?);
                }
                "--style" => {
                    let value = require_value(args, "--style")?;
                    form.learning_style = LearningStyle::from_label(&value)
                        .ok_or(ArgsError::InvalidStyle { raw: value })?;
                }
                "--api-url" => api.base_url = Some(require_value(args, "--api-url")?),
                "--quiz-week" => {
                    let value = require_value(args, "--quiz-week")?;
                    let week = value
                        .parse::<u32>()
                        .map_err(|_| ArgsError::InvalidWeek { raw: value.clone() })?;
                    quiz_week = Some(week);
                }
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            form,
            api,
            quiz_week,
        })
    }
}

struct NormalizeArgs {
    file: String,
    goal: Option<String>,
}

impl NormalizeArgs {
    fn parse(args: &mut impl Iterator<Item = String>) -> Result<Self, ArgsError> {
        let mut file = None;
        let mut goal = None;

        while let Some(arg) = args.next() {
            match arg.as_str() {
                "--goal" => goal = Some(require_value(args, "--goal")?),
                other if other.starts_with("--") => return Err(ArgsError::UnknownArg(arg)),
                _ if file.is_none() => file = Some(arg),
                _ => return Err(ArgsError::UnknownArg(arg)),
            }
        }

        Ok(Self {
            file: file.ok_or(ArgsError::MissingArg { name: "response.json" })?,
            goal,
        })
    }
}

/// Walk the wizard with the answers from the command line so every step is
/// validated the same way the interactive form does it.
fn run_wizard(form: FormState) -> Result<UserProfile, StepErrors> {
    let mut wizard = OnboardingWizard::new();
    for skill in &form.current_skills {
        wizard.add_skill(skill);
    }
    wizard.set_target_goal(form.target_goal);
    wizard.set_hours_per_week(form.hours_per_week);
    wizard.set_duration_weeks(form.duration_weeks);
    wizard.set_learning_style(form.learning_style);

    loop {
        let step = wizard.step();
        match wizard.advance() {
            Ok(WizardOutcome::Completed(profile)) => return Ok(profile),
            Ok(WizardOutcome::Advanced(_)) => {}
            Err(errors) => {
                eprintln!("{} step is incomplete", step.title());
                return Err(errors);
            }
        }
    }
}

fn print_path(path: &LearningPath, store: &ProgressStore) {
    println!("{}", path.goal);
    println!(
        "{} weeks, {} hours, {:.0}% complete",
        path.week_count(),
        store.planned_hours(),
        store.progress_percentage()
    );
    if !path.prerequisites.is_empty() {
        println!("Prerequisites: {}", path.prerequisites.join(", "));
    }
    for week in &path.weeks {
        println!();
        println!("Week {}: {} ({}h)", week.week_number, week.title, week.estimated_hours);
        if !week.rationale.is_empty() {
            println!("  Why: {}", week.rationale);
        }
        for topic in &week.topics {
            println!("  - {topic}");
        }
        for resource in &week.resources {
            let link = resource
                .link()
                .map_or_else(String::new, |url| format!(" <{url}>"));
            println!("  [{:?}] {}{link}", resource.kind, resource.title);
        }
    }
    if !path.outcomes.is_empty() {
        println!();
        println!("Outcomes:");
        for outcome in &path.outcomes {
            println!("  - {outcome}");
        }
    }
    if let Some(project) = path.final_project.as_deref() {
        println!();
        println!("Final project: {project}");
    }
}

fn print_quiz(session: &QuizSession) {
    println!();
    println!("Quiz for week {}:", session.week().week_number);
    for (index, question) in session.quiz().questions.iter().enumerate() {
        println!("{}. {}", index + 1, question.prompt);
        for (option_index, option) in question.options.iter().enumerate() {
            println!("   {}) {option}", char::from(b'a' + (option_index % 26) as u8));
        }
    }
}

async fn run_generate(args: GenerateArgs) -> Result<(), Box<dyn std::error::Error>> {
    let profile = run_wizard(args.form)?;
    let config = args.api.validate()?;
    log::debug!("using {config:?}");
    let api = Arc::new(HttpLearningPathApi::new(config)?);

    let mut store = ProgressStore::new();
    PathService::new(api.clone())
        .generate(&mut store, profile)
        .await?;

    let Some(path) = store.learning_path() else {
        return Ok(());
    };
    print_path(path, &store);

    if let Some(number) = args.quiz_week {
        let Some(week) = path.weeks.iter().find(|week| week.week_number == number) else {
            eprintln!("no week {number} in this path");
            return Ok(());
        };
        let session = QuizService::new(api).start_quiz(week).await?;
        print_quiz(&session);
    }
    Ok(())
}

fn run_normalize(args: NormalizeArgs) -> Result<(), Box<dyn std::error::Error>> {
    let raw: serde_json::Value = serde_json::from_str(&std::fs::read_to_string(&args.file)?)?;
    let normalizer = match args.goal {
        Some(goal) => PathNormalizer::new().with_fallback_goal(goal),
        None => PathNormalizer::new(),
    };
    let path = normalizer.normalize(&raw)?;

    let mut store = ProgressStore::new();
    store.set_learning_path(Some(path));
    if let Some(path) = store.learning_path() {
        print_path(path, &store);
    }
    Ok(())
}

async fn run() -> Result<(), Box<dyn std::error::Error>> {
    let mut argv = std::env::args().skip(1);

    match argv.next().as_deref() {
        Some("generate") => {
            let args = GenerateArgs::parse(&mut argv).inspect_err(|_| print_usage())?;
            run_generate(args).await
        }
        Some("normalize") => {
            let args = NormalizeArgs::parse(&mut argv).inspect_err(|_| print_usage())?;
            run_normalize(args)
        }
        Some("--help" | "-h") | None => {
            print_usage();
            Ok(())
        }
        Some(other) => {
            eprintln!("unknown subcommand: {other}");
            print_usage();
            Err(ArgsError::UnknownArg(other.to_string()).into())
        }
    }
}

#[tokio::main]
async fn main() {
    env_logger::init();

    if let Err(err) = run().await {
        eprintln!("{err}");
        std::process::exit(2);
    }
}
