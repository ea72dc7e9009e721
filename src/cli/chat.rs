use anyhow::Result;
use rustyline::DefaultEditor;
use rustyline::error::ReadlineError;

use crate::core::AppConfig;
use crate::profile::Profile;
use crate::session::Session;

fn read_field(rl: &mut DefaultEditor, label: &str) -> Result<String> {
    Ok(rl.readline(&format!("{}: ", label))?.trim().to_string())
}

/// Prompt for the profile fields until a submission goes through.
async fn run_form(
    rl: &mut DefaultEditor,
    session: &mut Session,
    config: &AppConfig,
) -> Result<()> {
    loop {
        let profile = Profile {
            name: read_field(rl, "Name")?,
            email: read_field(rl, "Email")?,
            contact_number: read_field(rl, "Contact No.")?,
            area_of_interest: read_field(rl, "Area of Interest")?,
            course: read_field(rl, "Course")?,
            training_mode: read_field(rl, "Training Mode")?,
            contact_mode: read_field(rl, "Preferred Contact Mode")?,
        };

        match session.submit_profile(config, profile).await {
            Ok(outcome) => {
                if let Some(warning) = outcome.notification_error {
                    println!("{}", warning);
                }
                if outcome.transitioned {
                    println!("Profile submitted. You can start chatting now.");
                    return Ok(());
                }
            }
            Err(e) => println!("{}", e.message),
        }
    }
}

pub async fn run(skip_form: bool) -> Result<()> {
    let config = AppConfig::default();
    let mut session = Session::new(&config);
    let mut rl = DefaultEditor::new().expect("Editor failed");

    if skip_form {
        session.skip_form();
    } else {
        run_form(&mut rl, &mut session, &config).await?;
    }

    loop {
        let readline = rl.readline(">>> ");
        match readline {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                let reply = session.send_message(&config, &line).await?;
                println!("{}", reply);
            }
            Err(ReadlineError::Interrupted) => break,
            Err(ReadlineError::Eof) => break,
            Err(err) => {
                println!("Error: {:?}", err);
                break;
            }
        }
    }

    Ok(())
}
