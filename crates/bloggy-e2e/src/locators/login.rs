use super::Selector;

/// Header controls and the admin login form.
pub struct LoginPageLocators;

impl LoginPageLocators {
    pub const ADMIN_BUTTON: Selector = Selector::new("ADMIN_BUTTON", "header a[href='/login']");
    pub const USERNAME_FIELD: Selector = Selector::new(
        "USERNAME_FIELD",
        "#auth-tabpanel-0 form input[name='username'], #auth-tabpanel-0 form input[type='text']",
    );
    pub const PASSWORD_FIELD: Selector = Selector::new(
        "PASSWORD_FIELD",
        "#auth-tabpanel-0 form input[type='password']",
    );
    pub const SUBMIT_BUTTON: Selector =
        Selector::new("SUBMIT_BUTTON", "//*[@id='auth-tabpanel-0']/div/form/button");
    pub const LOGOUT: Selector = Selector::new("LOGOUT", "header button:has-text('Logout')");
    pub const DASHBOARD_LINK: Selector =
        Selector::new("DASHBOARD_LINK", "header a[href='/admin']");
    pub const INVALID_CREDENTIALS_MESSAGE: Selector = Selector::new(
        "INVALID_CREDENTIALS_MESSAGE",
        "//*[contains(text(),'Invalid credentials')]",
    );

    pub const ALL: &'static [Selector] = &[
        Self::ADMIN_BUTTON,
        Self::USERNAME_FIELD,
        Self::PASSWORD_FIELD,
        Self::SUBMIT_BUTTON,
        Self::LOGOUT,
        Self::DASHBOARD_LINK,
        Self::INVALID_CREDENTIALS_MESSAGE,
    ];
}
