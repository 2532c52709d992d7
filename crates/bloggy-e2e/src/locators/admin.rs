use super::Selector;

/// Admin dashboard table, delete dialog and the blog composer.
pub struct AdminPageLocators;

impl AdminPageLocators {
    // Dashboard
    pub const DASHBOARD_HEADING: Selector =
        Selector::new("DASHBOARD_HEADING", "h1:has-text('Blog Management')");
    pub const BLOG_ROW: Selector = Selector::new("BLOG_ROW", "table tbody tr");
    pub const TITLE_CELL_IN_ROW: Selector = Selector::new("TITLE_CELL_IN_ROW", "td:nth-child(1)");
    pub const DELETE_BUTTON_IN_ROW: Selector =
        Selector::new("DELETE_BUTTON_IN_ROW", "button[title='Delete']");
    pub const STATUS_CHIP_IN_ROW: Selector =
        Selector::new("STATUS_CHIP_IN_ROW", "td:nth-child(3) span.MuiChip-label");
    pub const DELETE_DIALOG: Selector = Selector::new("DELETE_DIALOG", "div[role='dialog']");
    pub const CONFIRM_DELETE_BUTTON: Selector = Selector::new(
        "CONFIRM_DELETE_BUTTON",
        "[data-testid='confirm-delete-button']",
    );
    pub const CANCEL_DELETE_BUTTON: Selector = Selector::new(
        "CANCEL_DELETE_BUTTON",
        "div[role='dialog'] button:has-text('Cancel')",
    );

    // Composer
    pub const CREATE_BLOG_BUTTON: Selector = Selector::new(
        "CREATE_BLOG_BUTTON",
        "button:has-text('New Blog Post'), a[href='/admin/blog/new']",
    );
    pub const TITLE_INPUT: Selector = Selector::new(
        "TITLE_INPUT",
        "div.MuiTextField-root:has(label:has-text('Title')) input",
    );
    pub const EXCERPT_INPUT: Selector = Selector::new(
        "EXCERPT_INPUT",
        "div.MuiTextField-root:has(label:has-text('Excerpt')) textarea:not([aria-hidden='true'])",
    );
    pub const CONTENT_EDITOR: Selector = Selector::new("CONTENT_EDITOR", "div.ql-editor");
    pub const CATEGORY_SELECT: Selector = Selector::new(
        "CATEGORY_SELECT",
        "div.MuiFormControl-root:has(label:has-text('Category')) [aria-haspopup='listbox']",
    );
    pub const TAGS_SELECT: Selector = Selector::new(
        "TAGS_SELECT",
        "div.MuiFormControl-root:has(label:has-text('Tags')) [aria-haspopup='listbox']",
    );
    pub const PICKER_OPTION: Selector =
        Selector::new("PICKER_OPTION", "ul[role='listbox'] li[role='option']");
    pub const PICKER_BACKDROP: Selector = Selector::new(
        "PICKER_BACKDROP",
        "div.MuiPopover-root div.MuiBackdrop-root",
    );
    pub const SAVE_BUTTON: Selector = Selector::new("SAVE_BUTTON", "form button:has-text('Save')");
    pub const PUBLISH_NOW_BUTTON: Selector =
        Selector::new("PUBLISH_NOW_BUTTON", "form button:has-text('Publish Now')");
    pub const CANCEL_EDIT_BUTTON: Selector =
        Selector::new("CANCEL_EDIT_BUTTON", "form button:has-text('Cancel')");

    pub const ALL: &'static [Selector] = &[
        Self::DASHBOARD_HEADING,
        Self::BLOG_ROW,
        Self::TITLE_CELL_IN_ROW,
        Self::DELETE_BUTTON_IN_ROW,
        Self::STATUS_CHIP_IN_ROW,
        Self::DELETE_DIALOG,
        Self::CONFIRM_DELETE_BUTTON,
        Self::CANCEL_DELETE_BUTTON,
        Self::CREATE_BLOG_BUTTON,
        Self::TITLE_INPUT,
        Self::EXCERPT_INPUT,
        Self::CONTENT_EDITOR,
        Self::CATEGORY_SELECT,
        Self::TAGS_SELECT,
        Self::PICKER_OPTION,
        Self::PICKER_BACKDROP,
        Self::SAVE_BUTTON,
        Self::PUBLISH_NOW_BUTTON,
        Self::CANCEL_EDIT_BUTTON,
    ];
}
