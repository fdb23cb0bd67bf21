use std::path::PathBuf;
use std::time::Duration;

use clap::{Arg, Command, value_parser};

use madcreate_client::form::catalog::ImageStyle;
use madcreate_client::form::contact::ContactData;
use madcreate_client::form::state::{FormField, FormState};
use madcreate_client::{
    Credentials, DEFAULT_BASE_URL, GenerationOutcome, MadCreateClient, PollSchedule,
};

fn main() -> anyhow::Result<()> {
    let matches = Command::new("madcreate-client")
        .about("Submit a MadCreate ad-generation form and wait for the image")
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .required(false)
                .default_value(DEFAULT_BASE_URL),
        )
        .arg(Arg::new("api-key").long("api-key").required(false))
        .arg(Arg::new("product-name").long("product-name").required(true))
        .arg(Arg::new("industry").long("industry").required(true))
        .arg(
            Arg::new("style")
                .long("style")
                .required(false)
                .default_value("realistic")
                .help("realistic, cartoon, anime or abstract"),
        )
        .arg(Arg::new("problem").long("problem").required(false).default_value(""))
        .arg(Arg::new("tone").long("tone").required(false).default_value(""))
        .arg(Arg::new("cta").long("cta").required(false).default_value(""))
        .arg(
            Arg::new("user-photo")
                .long("user-photo")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(
            Arg::new("logo-photo")
                .long("logo-photo")
                .required(false)
                .value_parser(value_parser!(PathBuf)),
        )
        .arg(Arg::new("name").long("name").required(false).default_value(""))
        .arg(Arg::new("email").long("email").required(true))
        .arg(Arg::new("company").long("company").required(false))
        .arg(Arg::new("phone").long("phone").required(false))
        .arg(
            Arg::new("initial-delay-ms")
                .long("initial-delay-ms")
                .required(false)
                .default_value("10000")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("poll-interval-ms")
                .long("poll-interval-ms")
                .required(false)
                .default_value("3000")
                .value_parser(value_parser!(u64)),
        )
        .arg(
            Arg::new("max-attempts")
                .long("max-attempts")
                .required(false)
                .default_value("20")
                .value_parser(value_parser!(u32)),
        )
        .get_matches();

    let base_url = matches
        .get_one::<String>("base-url")
        .expect("base-url has a default value");
    let credentials = match matches.get_one::<String>("api-key") {
        Some(key) => Credentials::with_api_key(base_url.clone(), key.clone()),
        None => Credentials::new(base_url.clone()),
    };
    let client = MadCreateClient::new(vec![credentials], true)?;

    let mut form = FormState::new();
    form.set_field(
        FormField::ProductName,
        matches
            .get_one::<String>("product-name")
            .expect("product-name is a required arg"),
    );
    form.set_field(
        FormField::Industry,
        matches
            .get_one::<String>("industry")
            .expect("industry is a required arg"),
    );
    let style: ImageStyle = matches
        .get_one::<String>("style")
        .expect("style has a default value")
        .parse()?;
    form.select_style(style);
    form.set_field(
        FormField::ProblemStatement,
        matches.get_one::<String>("problem").expect("problem has a default value"),
    );
    form.set_field(
        FormField::Tone,
        matches.get_one::<String>("tone").expect("tone has a default value"),
    );
    form.set_field(
        FormField::Cta,
        matches.get_one::<String>("cta").expect("cta has a default value"),
    );

    if let Some(path) = matches.get_one::<PathBuf>("user-photo") {
        form.set_user_photo(client.load_photo(path)?);
    }
    if let Some(path) = matches.get_one::<PathBuf>("logo-photo") {
        form.set_logo_photo(client.load_photo(path)?);
    }

    if !form.validate() {
        for (field, message) in form.errors() {
            eprintln!("{:?}: {}", field, message);
        }
        anyhow::bail!("form is incomplete");
    }

    let contact = ContactData {
        name: matches
            .get_one::<String>("name")
            .expect("name has a default value")
            .clone(),
        email: matches
            .get_one::<String>("email")
            .expect("email is a required arg")
            .clone(),
        company: matches.get_one::<String>("company").cloned(),
        phone: matches.get_one::<String>("phone").cloned(),
        ..ContactData::default()
    };
    let contact_errors = contact.validate();
    if !contact_errors.is_empty() {
        for (field, message) in &contact_errors {
            eprintln!("{:?}: {}", field, message);
        }
        anyhow::bail!("contact details are invalid");
    }

    let schedule = PollSchedule {
        initial_delay: Duration::from_millis(
            *matches
                .get_one::<u64>("initial-delay-ms")
                .expect("initial-delay-ms has a default value"),
        ),
        poll_interval: Duration::from_millis(
            *matches
                .get_one::<u64>("poll-interval-ms")
                .expect("poll-interval-ms has a default value"),
        ),
        max_attempts: *matches
            .get_one::<u32>("max-attempts")
            .expect("max-attempts has a default value"),
    };

    let payload = form.to_payload(&contact);
    let outcome = client.run_form_submission(&payload, schedule, |update| {
        eprintln!("[{:>3}%] {}", update.percent, update.message);
    });

    match outcome {
        Ok(GenerationOutcome::Completed { image_url }) => {
            println!("{}", image_url);
            Ok(())
        }
        Ok(GenerationOutcome::Failed { message }) => {
            anyhow::bail!(
                "generation failed: {}",
                message.unwrap_or_else(|| "no details from the backend".to_owned())
            )
        }
        Err(madcreate_client::ClientError::PollTimeout { .. }) => {
            anyhow::bail!("the ad is still processing; try retrieving it again in a moment")
        }
        Err(err) => Err(err.into()),
    }
}
