use serde::{Deserialize, Serialize};

/// A dashboard page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Route {
    #[default]
    Dashboard,
    Challenges,
    Impact,
    Settings,
    Alerts,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::Dashboard,
        Route::Challenges,
        Route::Impact,
        Route::Settings,
        Route::Alerts,
    ];

    pub fn title(self) -> &'static str {
        match self {
            Route::Dashboard => "Dashboard",
            Route::Challenges => "Challenges",
            Route::Impact => "Impact",
            Route::Settings => "Settings",
            Route::Alerts => "Alerts",
        }
    }

    pub fn path(self) -> &'static str {
        match self {
            Route::Dashboard => "/dashboard",
            Route::Challenges => "/challenges",
            Route::Impact => "/impact",
            Route::Settings => "/settings",
            Route::Alerts => "/alerts",
        }
    }
}
