//! Account commands - register, find and list users

use clap::Args;
use tracing::error;

use crate::infrastructure::user::RegisterUserRequest;

/// Arguments for the register command
#[derive(Args, Clone)]
pub struct RegisterArgs {
    /// Display name
    #[arg(long)]
    pub name: String,

    /// Email address, unique across accounts
    #[arg(long)]
    pub email: String,

    /// Password (at least 6 characters, stored as entered)
    #[arg(long)]
    pub password: String,
}

/// Arguments for the find command
#[derive(Args, Clone)]
pub struct FindArgs {
    /// Email address to look up
    pub email: String,
}

/// Register a new account
pub fn register(args: RegisterArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let service = crate::create_user_service(&config)?;

    let request = RegisterUserRequest::new(args.name, args.email, args.password);

    match service.register(request) {
        Ok(user) => {
            println!("Registered {} <{}> (id {})", user.name(), user.email(), user.id());
            Ok(())
        }
        Err(e) if e.is_recoverable() => anyhow::bail!("{}", e.user_message()),
        Err(e) => {
            error!("Registration failed: {}", e);
            let message = e.user_message();
            Err(anyhow::Error::new(e).context(message))
        }
    }
}

/// Look up an account by email
pub fn find(args: FindArgs) -> anyhow::Result<()> {
    let config = super::bootstrap();
    let service = crate::create_user_service(&config)?;

    match service.find_by_email(&args.email)? {
        Some(user) => {
            println!(
                "{}\t{}\t{}\t{}",
                user.id(),
                user.name(),
                user.email(),
                user.join_date().to_rfc3339()
            );
            Ok(())
        }
        None => anyhow::bail!("No account found for {}", args.email),
    }
}

/// List accounts in registration order
pub fn list() -> anyhow::Result<()> {
    let config = super::bootstrap();
    let service = crate::create_user_service(&config)?;

    for user in service.list() {
        println!(
            "{}\t{}\t{}\t{}",
            user.id(),
            user.name(),
            user.email(),
            user.join_date().to_rfc3339()
        );
    }

    Ok(())
}
