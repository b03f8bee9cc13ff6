//! CLI command implementations
//!
//! `run` reads one request per line and answers each with one response
//! line. A failed request is reported and the loop continues.
//!
//! Request shapes:
//!
//! ```text
//! {"op":"tables"}
//! {"op":"insert","table":"users","row":{"name":"John Doe","email":"john.doe@email.com"}}
//! {"op":"get_all","table":"users"}
//! {"op":"get","table":"users","id":1}
//! {"op":"update","table":"users","id":1,"row":{"name":"John Doe Updated"}}
//! {"op":"delete","table":"users","id":2}
//! ```

use std::io::{self, BufRead, Write};
use std::path::Path;

use serde::Deserialize;
use serde_json::{json, Value};
use tracing::{debug, info, warn};

use crate::config::Config;
use crate::database::Database;
use crate::observability::{init_logging, Event};
use crate::record::Record;
use crate::schema::Row;

use super::args::{Cli, Command};
use super::errors::{CliError, CliResult};
use super::io::{read_requests, write_error, write_response};

/// A single request
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(tag = "op", rename_all = "snake_case")]
pub enum Request {
    /// List table names
    Tables,
    /// Insert a row
    Insert { table: String, row: Row },
    /// Read all rows
    GetAll { table: String },
    /// Read one row by id
    Get { table: String, id: i64 },
    /// Partially update a row
    Update { table: String, id: i64, row: Row },
    /// Delete a row by id
    Delete { table: String, id: i64 },
}

impl Request {
    /// Operation name, for logging
    pub fn op(&self) -> &'static str {
        match self {
            Request::Tables => "tables",
            Request::Insert { .. } => "insert",
            Request::GetAll { .. } => "get_all",
            Request::Get { .. } => "get",
            Request::Update { .. } => "update",
            Request::Delete { .. } => "delete",
        }
    }
}

/// Parse arguments and run the selected command
pub fn run() -> CliResult<()> {
    let cli = Cli::parse_args();
    run_command(cli.command)
}

/// Run a parsed command
pub fn run_command(command: Command) -> CliResult<()> {
    match command {
        Command::Tables { config } => tables(&config),
        Command::Run { config } => serve(&config),
    }
}

/// Print the configured table names
pub fn tables(config_path: &Path) -> CliResult<()> {
    let db = boot(config_path)?;
    write_response(&mut io::stdout().lock(), json!(db.table_names()))
}

/// Execute requests from stdin until EOF
pub fn serve(config_path: &Path) -> CliResult<()> {
    let mut db = boot(config_path)?;
    let stdin = io::stdin();
    let stdout = io::stdout();
    let handled = serve_requests(&mut db, stdin.lock(), &mut stdout.lock())?;
    info!(requests = handled, "input closed");
    Ok(())
}

fn boot(config_path: &Path) -> CliResult<Database> {
    let config = Config::load(config_path)?;
    init_logging(&config.log_level, config.log_format())?;
    info!(
        event = %Event::ConfigLoaded,
        path = %config_path.display(),
        tables = config.tables.len()
    );
    Ok(Database::from_config(&config)?)
}

/// Answer every request read from `reader`, returning how many were handled.
///
/// Only I/O errors on `writer` end the loop.
pub fn serve_requests<R: BufRead, W: Write>(
    db: &mut Database,
    reader: R,
    writer: &mut W,
) -> CliResult<usize> {
    let mut handled = 0;

    for request in read_requests(reader) {
        handled += 1;
        let outcome = request.and_then(|value| execute_request(db, &value));

        match outcome {
            Ok(data) => write_response(writer, data)?,
            Err(CliError::Io(e)) => return Err(CliError::Io(e)),
            Err(e) => {
                warn!(event = %Event::RequestFailed, code = e.code(), reason = %e);
                write_error(writer, e.code(), &e.display_message())?;
            }
        }
    }

    Ok(handled)
}

/// Execute one JSON request against the database
pub fn execute_request(db: &mut Database, request: &Value) -> CliResult<Value> {
    let request = Request::deserialize(request)?;
    debug!(event = %Event::RequestReceived, op = request.op());
    execute(db, request)
}

/// Execute one parsed request
pub fn execute(db: &mut Database, request: Request) -> CliResult<Value> {
    let data = match request {
        Request::Tables => json!(db.table_names()),
        Request::Insert { table, row } => db.table(&table)?.insert(&row)?.to_json(),
        Request::GetAll { table } => {
            let records = db.table(&table)?.get_all();
            Value::Array(records.iter().map(Record::to_json).collect())
        }
        Request::Get { table, id } => db.table(&table)?.get_by_id(id)?.to_json(),
        Request::Update { table, id, row } => db.table(&table)?.update(id, &row)?.to_json(),
        Request::Delete { table, id } => db.table(&table)?.delete_by_id(id)?.to_json(),
    };
    Ok(data)
}
