//! Auth CLI commands
//!
//! Registration, sign-in, and session management against the identity
//! provider. Passwords are prompted when not passed by flag.

use clap::Subcommand;

use crate::auth::AuthService;
use crate::config::paths::FintrackPaths;
use crate::error::{FintrackError, FintrackResult};

/// Auth subcommands
#[derive(Subcommand)]
pub enum AuthCommands {
    /// Create an account and sign in
    Register {
        /// Display name
        #[arg(short, long)]
        name: String,
        /// Email address
        #[arg(short, long)]
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign in
    Login {
        /// Email address
        email: String,
        /// Password (prompted when omitted)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// Sign out and remove the session
    Logout,
    /// Show the signed-in user
    Whoami,
}

/// Handle an auth command
pub fn handle_auth_command(paths: &FintrackPaths, cmd: AuthCommands) -> FintrackResult<()> {
    let service = AuthService::new(paths);

    match cmd {
        AuthCommands::Register {
            name,
            email,
            password,
        } => {
            let password = read_password(password)?;
            let user = service.register(&name, &email, &password)?;
            println!("Welcome, {}! You are now signed in.", user.name);
        }

        AuthCommands::Login { email, password } => {
            let password = read_password(password)?;
            let user = service.login(&email, &password)?;
            println!("Signed in as {}.", user);
        }

        AuthCommands::Logout => {
            service.logout()?;
            println!("Signed out.");
        }

        AuthCommands::Whoami => match service.current_user()? {
            Some(user) => println!("{}", user),
            None => println!("Not signed in."),
        },
    }

    Ok(())
}

fn read_password(flag: Option<String>) -> FintrackResult<String> {
    match flag {
        Some(password) => Ok(password),
        None => rpassword::prompt_password("Password: ")
            .map_err(|e| FintrackError::Io(format!("Failed to read password: {}", e))),
    }
}
