//! Account routes.
//!
//! ## Routes
//!
//! | ID | Method | Path |
//! |----|--------|------|
//! | listAccount | GET | /v1/accounts |
//! | storeAccount | POST | /v1/accounts |
//! | getAccount | GET | /v1/accounts/{id} |
//! | updateAccount | PUT | /v1/accounts/{id} |
//! | deleteAccount | DELETE | /v1/accounts/{id} |
//! | listTransactionByAccount | GET | /v1/accounts/{id}/transactions |
//! | listAttachmentByAccount | GET | /v1/accounts/{id}/attachments |

mod types;

pub use types::{Account, AccountTypeFilter, ShortAccountType};

use firefly_define::{ApiRequest, Field, QueryParam, RestMethod, Route, Shape};

use crate::attachments::attachment_array;
use crate::common::{
    RouteExt, array, enabled_by_default, maybe_text, read, single, text, timestamped,
};
use crate::transactions::transaction_array;

const RESOURCE: &str = "accounts";

/// Long account type names, as used on transaction splits.
pub(crate) const ACCOUNT_TYPES: [&str; 12] = [
    "Default account",
    "Cash account",
    "Asset account",
    "Expense account",
    "Revenue account",
    "Initial balance account",
    "Beneficiary account",
    "Import account",
    "Reconciliation account",
    "Loan",
    "Debt",
    "Mortgage",
];

fn short_type() -> Shape {
    Shape::enumeration([
        "asset",
        "expense",
        "import",
        "revenue",
        "cash",
        "liability",
        "liabilities",
        "initial-balance",
        "reconciliation",
    ])
}

fn optional_enum(name: &str, values: &[&str]) -> Field {
    Field::new(name, Shape::enumeration(values.iter().copied())).nullish()
}

fn role() -> Field {
    optional_enum(
        "account_role",
        &["defaultAsset", "sharedAsset", "savingAsset", "ccAsset", "cashWalletAsset", "null"],
    )
}

fn liability_fields() -> Vec<Field> {
    vec![
        optional_enum("credit_card_type", &["monthlyFull", "null"]),
        Field::new("monthly_payment_date", Shape::date_time()).nullish(),
        optional_enum("liability_type", &["loan", "debt", "mortgage", "null"]),
        optional_enum("liability_direction", &["credit", "debit", "null"]),
        maybe_text("interest"),
        optional_enum(
            "interest_period",
            &["weekly", "monthly", "quarterly", "half-year", "yearly", "null"],
        ),
    ]
}

fn location_fields() -> Vec<Field> {
    vec![
        maybe_text("notes"),
        Field::new("latitude", Shape::number()).nullish(),
        Field::new("longitude", Shape::number()).nullish(),
        Field::new("zoom_level", Shape::integer()).nullish(),
    ]
}

/// Attributes of an account as returned by the server.
pub fn account() -> Shape {
    let mut fields = vec![
        enabled_by_default("active"),
        Field::new("order", Shape::integer()).nullish(),
        Field::new("name", Shape::string()),
        Field::new("type", short_type()),
        role(),
        text("currency_id"),
        text("currency_code"),
        text("currency_symbol"),
        Field::new("currency_decimal_places", Shape::integer()).optional(),
        text("current_balance"),
        Field::new("current_balance_date", Shape::date_time()).optional(),
        maybe_text("iban"),
        maybe_text("bic"),
        maybe_text("account_number"),
        text("opening_balance"),
        maybe_text("current_debt"),
        Field::new("opening_balance_date", Shape::date_time()).nullish(),
        text("virtual_balance"),
        enabled_by_default("include_net_worth"),
    ];
    fields.extend(liability_fields());
    fields.extend(location_fields());
    timestamped(fields)
}

fn account_write(store: bool) -> Shape {
    let mut fields = vec![Field::new("name", Shape::string())];
    if store {
        fields.push(Field::new("type", short_type()));
    }
    fields.extend([
        maybe_text("iban"),
        maybe_text("bic"),
        maybe_text("account_number"),
        text("opening_balance"),
        Field::new("opening_balance_date", Shape::date_time()).nullish(),
        text("virtual_balance"),
        text("currency_id"),
        text("currency_code"),
        enabled_by_default("active"),
        Field::new("order", Shape::integer()).optional(),
        enabled_by_default("include_net_worth"),
        role(),
    ]);
    fields.extend(liability_fields());
    fields.extend(location_fields());
    Shape::object(fields)
}

/// A single account resource object.
pub fn account_read() -> Shape {
    read(account(), false)
}

/// `{data: [account], meta}`.
pub fn account_array() -> Shape {
    array(account_read(), false)
}

pub fn list_account() -> Route {
    Route::new("listAccount", RESOURCE, RestMethod::Get, "/v1/accounts")
        .summary("List all accounts.")
        .paged()
        .query(QueryParam::optional("date"))
        .query(QueryParam::optional("type"))
        .reads(account_array())
        .with_errors()
}

pub fn store_account() -> Route {
    Route::new("storeAccount", RESOURCE, RestMethod::Post, "/v1/accounts")
        .summary("Create new account.")
        .request(ApiRequest::json(account_write(true)))
        .reads(single(account_read()))
        .with_validation_errors()
}

pub fn get_account() -> Route {
    Route::new("getAccount", RESOURCE, RestMethod::Get, "/v1/accounts/{id}")
        .summary("Get single account information.")
        .query(QueryParam::optional("date"))
        .reads(single(account_read()))
        .with_errors()
}

pub fn update_account() -> Route {
    Route::new("updateAccount", RESOURCE, RestMethod::Put, "/v1/accounts/{id}")
        .summary("Update existing account.")
        .request(ApiRequest::json(account_write(false)))
        .reads(single(account_read()))
        .with_validation_errors()
}

pub fn delete_account() -> Route {
    Route::new("deleteAccount", RESOURCE, RestMethod::Delete, "/v1/accounts/{id}")
        .summary("Permanently delete account.")
        .no_content()
        .with_errors()
}

pub fn list_transaction_by_account() -> Route {
    Route::new(
        "listTransactionByAccount",
        RESOURCE,
        RestMethod::Get,
        "/v1/accounts/{id}/transactions",
    )
    .summary("List all transactions related to the account.")
    .paged()
    .query(QueryParam::optional("start"))
    .query(QueryParam::optional("end"))
    .query(QueryParam::optional("type"))
    .reads(transaction_array())
    .with_errors()
}

pub fn list_attachment_by_account() -> Route {
    Route::new(
        "listAttachmentByAccount",
        RESOURCE,
        RestMethod::Get,
        "/v1/accounts/{id}/attachments",
    )
    .summary("Lists all attachments.")
    .paged()
    .reads(attachment_array())
    .with_errors()
}
