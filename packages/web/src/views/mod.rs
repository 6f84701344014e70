mod login;
pub use login::Login;

mod dashboard;
pub use dashboard::Dashboard;

mod chat;
pub use chat::Chat;

mod ai_chat;
pub use ai_chat::AiChat;

mod pdv;
pub use pdv::Pdv;

mod record_form;

mod financeiro;
pub use financeiro::Financeiro;

mod financeiro_registros;
pub use financeiro_registros::FinanceiroRegistros;

mod doom;
pub use doom::Doom;

mod admin_users;
pub use admin_users::AdminUsers;

mod admin_user_edit;
pub use admin_user_edit::AdminUserEdit;
