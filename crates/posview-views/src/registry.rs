//! Registry of the nine back-office views.

use posview_model::{ModelError, Row, ViewSchema};

/// One registered view: its schema plus its seed dataset.
#[derive(Debug, Clone)]
pub struct ViewDef {
    schema: ViewSchema,
    seed: fn() -> Vec<Row>,
}

impl ViewDef {
    pub fn schema(&self) -> &ViewSchema {
        &self.schema
    }

    pub fn name(&self) -> &str {
        &self.schema.name
    }

    pub fn title(&self) -> &str {
        &self.schema.title
    }

    /// A fresh copy of the view's seed rows.
    pub fn seed_rows(&self) -> Vec<Row> {
        (self.seed)()
    }
}

/// All registered views, in menu order.
pub fn all_views() -> Vec<ViewDef> {
    vec![
        view(crate::accounts::schema(), crate::accounts::seed_rows),
        view(crate::balance_sheet::schema(), crate::balance_sheet::seed_rows),
        view(crate::brands::schema(), crate::brands::seed_rows),
        view(crate::categories::schema(), crate::categories::seed_rows),
        view(crate::customers::schema(), crate::customers::seed_rows),
        view(crate::money_transfer::schema(), crate::money_transfer::seed_rows),
        view(crate::sales::schema(), crate::sales::seed_rows),
        view(crate::suppliers::schema(), crate::suppliers::seed_rows),
        view(crate::users::schema(), crate::users::seed_rows),
    ]
}

/// Look up a view by its registry name (case-insensitive).
pub fn find_view(name: &str) -> Result<ViewDef, ModelError> {
    let wanted = name.trim().to_lowercase();
    all_views()
        .into_iter()
        .find(|view| view.name() == wanted)
        .ok_or(ModelError::UnknownView { name: wanted })
}

fn view(schema: ViewSchema, seed: fn() -> Vec<Row>) -> ViewDef {
    ViewDef { schema, seed }
}
