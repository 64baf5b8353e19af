mod panel;

pub use panel::TelegramAdminPage;
