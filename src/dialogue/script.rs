//! Fixed conversation script
//!
//! Every line the simulated bot can say, and every option it can offer,
//! lives here. The transition function only decides *which* line to use.

use super::message::Message;
use super::option::{Category, ChatOption, DbMetric, OptionVariant, Period, UserMetric};
use super::state::MenuState;

pub const INITIAL_GREETING: &str =
    "¡Hola! Soy el asistente de CoreBrain. ¿Qué informe te gustaría consultar hoy?";
pub const RESET_GREETING: &str = "¡Empecemos de nuevo! ¿Qué informe te gustaría consultar?";
pub const FALLBACK_REPLY: &str = "Lo siento, no he entendido tu solicitud. ¿En qué puedo ayudarte?";
pub const DOWNLOAD_ECHO: &str = "Descargar el informe";
pub const DOWNLOAD_REPLY: &str =
    "Tu informe se está descargando en formato PDF. ¿Quieres consultar algo más?";

/// Seed message shown when a preview is first mounted
pub fn initial_seed() -> Message {
    Message::bot(INITIAL_GREETING, options_for(&MenuState::Root))
}

/// Seed message reinstated by `back` / `restart`
pub fn reset_seed() -> Message {
    Message::bot(RESET_GREETING, options_for(&MenuState::Root))
}

/// The option set a bot message carries when the machine is in `state`
pub fn options_for(state: &MenuState) -> Vec<ChatOption> {
    use OptionVariant::{Outline, Plain, Secondary};

    match state {
        MenuState::Root => vec![
            ChatOption::new("sales", "Ventas", "chart-bar", Secondary),
            ChatOption::new("users", "Usuarios", "users", Secondary),
            ChatOption::new("db", "Base de datos", "database", Secondary),
        ],
        MenuState::SalesMenu => vec![
            ChatOption::new("monthly", "Mensual", "calendar", Secondary),
            ChatOption::new("quarterly", "Trimestral", "calendar", Secondary),
            ChatOption::new("annual", "Anual", "calendar", Secondary),
        ],
        MenuState::UsersMenu => vec![
            ChatOption::new("active", "Usuarios activos", "user-check", Secondary),
            ChatOption::new("new", "Nuevos usuarios", "user-plus", Secondary),
            ChatOption::new("behavior", "Comportamiento", "activity", Secondary),
        ],
        MenuState::DbMenu => vec![
            ChatOption::new("status", "Estado", "server", Secondary),
            ChatOption::new("performance", "Rendimiento", "gauge", Secondary),
            ChatOption::new("backup", "Copias de seguridad", "archive", Secondary),
        ],
        MenuState::ReportView { .. } => vec![
            ChatOption::new("download", "Descargar informe", "download", Outline),
            ChatOption::new("back", "Volver al menú", "arrow-left", Plain),
        ],
        MenuState::Downloaded => vec![ChatOption::new(
            "restart",
            "Volver al inicio",
            "refresh",
            Plain,
        )],
        MenuState::Fallback => vec![
            ChatOption::new("pricing", "Precios", "tag", Secondary),
            ChatOption::new("plans", "Planes", "layers", Secondary),
            ChatOption::new("support", "Soporte", "life-buoy", Secondary),
        ],
    }
}

// ============================================================================
// Group templates
// ============================================================================

fn category_noun(category: Category) -> &'static str {
    match category {
        Category::Sales => "ventas",
        Category::Users => "usuarios",
        Category::Db => "base de datos",
    }
}

fn period_adjective(period: Period) -> &'static str {
    match period {
        Period::Monthly => "mensual",
        Period::Quarterly => "trimestral",
        Period::Annual => "anual",
    }
}

fn user_metric_phrase(metric: UserMetric) -> &'static str {
    match metric {
        UserMetric::Active => "usuarios activos",
        UserMetric::New => "nuevos usuarios",
        UserMetric::Behavior => "comportamiento de usuarios",
    }
}

fn db_metric_phrase(metric: DbMetric) -> &'static str {
    match metric {
        DbMetric::Status => "el estado",
        DbMetric::Performance => "el rendimiento",
        DbMetric::Backup => "las copias de seguridad",
    }
}

pub fn category_echo(category: Category) -> String {
    format!("Quiero ver el informe de {}", category_noun(category))
}

pub fn category_prompt(category: Category) -> String {
    format!(
        "Perfecto, ¿qué parte del informe de {} te interesa?",
        category_noun(category)
    )
}

pub fn period_echo(period: Period) -> String {
    format!("Muéstrame el informe {}", period_adjective(period))
}

pub fn period_summary(period: Period) -> String {
    format!(
        "Aquí tienes el informe {} de ventas con la evolución de ingresos por producto.",
        period_adjective(period)
    )
}

pub fn user_metric_echo(metric: UserMetric) -> String {
    format!("Muéstrame los datos de {}", user_metric_phrase(metric))
}

pub fn user_metric_summary(metric: UserMetric) -> String {
    format!(
        "Estos son los datos de {} de los últimos 30 días.",
        user_metric_phrase(metric)
    )
}

pub fn db_metric_echo(metric: DbMetric) -> String {
    format!("Quiero revisar {} de la base de datos", db_metric_phrase(metric))
}

pub fn db_metric_summary(metric: DbMetric) -> String {
    format!(
        "Este es el resumen de {} de la base de datos. Todo funciona con normalidad.",
        db_metric_phrase(metric)
    )
}
