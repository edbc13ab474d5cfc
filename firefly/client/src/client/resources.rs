//! Resource groups: one method per catalog route.
//!
//! ## Examples
//!
//! ```no_run
//! use firefly_client::{CallParams, FireflyClient};
//!
//! # async fn run(client: FireflyClient) -> Result<(), firefly_client::ApiError> {
//! let account = client
//!     .accounts()
//!     .get_account(CallParams::new().path("id", 42))
//!     .await?;
//! assert_eq!(account.route.to_string(), "getAccount");
//! # Ok(())
//! # }
//! ```

use firefly_definitions::RouteId;

use super::FireflyClient;
use crate::call::CallParams;
use crate::error::ApiError;
use crate::response::Envelope;

macro_rules! resource_groups {
    ($(
        $(#[$doc:meta])*
        $group:ident => $accessor:ident($resource:literal) {
            $($method:ident => $route:ident,)*
        }
    )*) => {
        $(
            $(#[$doc])*
            #[derive(Debug, Clone, Copy)]
            pub struct $group<'a> {
                client: &'a FireflyClient,
            }

            impl $group<'_> {
                /// Name of the resource group in the catalog.
                pub const RESOURCE: &'static str = $resource;

                /// Routes of this group, in catalog order.
                pub fn routes(&self) -> &'static [RouteId] {
                    &[$(RouteId::$route),*]
                }

                $(
                    #[doc = concat!("Calls `", stringify!($route), "`.")]
                    pub async fn $method(&self, params: CallParams) -> Result<Envelope, ApiError> {
                        self.client.call(RouteId::$route, params).await
                    }
                )*
            }

            impl FireflyClient {
                $(#[$doc])*
                pub fn $accessor(&self) -> $group<'_> {
                    $group { client: self }
                }
            }
        )*
    };
}

resource_groups! {
    /// System information and the current user.
    About => about("about") {
        get_about => GetAbout,
        get_current_user => GetCurrentUser,
    }
    /// Asset, expense, revenue and liability accounts.
    Accounts => accounts("accounts") {
        list_account => ListAccount,
        store_account => StoreAccount,
        get_account => GetAccount,
        update_account => UpdateAccount,
        delete_account => DeleteAccount,
        list_transaction_by_account => ListTransactionByAccount,
        list_attachment_by_account => ListAttachmentByAccount,
    }
    /// File attachments, including binary upload and download.
    Attachments => attachments("attachments") {
        list_attachment => ListAttachment,
        store_attachment => StoreAttachment,
        get_attachment => GetAttachment,
        update_attachment => UpdateAttachment,
        delete_attachment => DeleteAttachment,
        download_attachment => DownloadAttachment,
        upload_attachment => UploadAttachment,
    }
    /// Suggestion lists for forms.
    Autocomplete => autocomplete("autocomplete") {
        get_accounts_ac => GetAccountsAc,
        get_categories_ac => GetCategoriesAc,
        get_currencies_ac => GetCurrenciesAc,
        get_tag_ac => GetTagAc,
        get_transactions_ac => GetTransactionsAc,
        get_transaction_types_ac => GetTransactionTypesAc,
    }
    /// Transaction categories.
    Categories => categories("categories") {
        list_category => ListCategory,
        store_category => StoreCategory,
        get_category => GetCategory,
        update_category => UpdateCategory,
        delete_category => DeleteCategory,
        list_transaction_by_category => ListTransactionByCategory,
    }
    /// System configuration values.
    Configuration => configuration("configuration") {
        get_configuration => GetConfiguration,
        get_single_configuration => GetSingleConfiguration,
        set_configuration => SetConfiguration,
    }
    /// Currencies, addressed by code.
    Currencies => currencies("currencies") {
        list_currency => ListCurrency,
        store_currency => StoreCurrency,
        get_default_currency => GetDefaultCurrency,
        get_currency => GetCurrency,
        update_currency => UpdateCurrency,
        delete_currency => DeleteCurrency,
        enable_currency => EnableCurrency,
        disable_currency => DisableCurrency,
        default_currency => DefaultCurrency,
        list_account_by_currency => ListAccountByCurrency,
    }
    /// Export, bulk update and purge.
    Data => data("data") {
        export_transactions => ExportTransactions,
        bulk_update_transactions => BulkUpdateTransactions,
        purge_data => PurgeData,
    }
    /// User preferences.
    Preferences => preferences("preferences") {
        list_preference => ListPreference,
        store_preference => StorePreference,
        get_preference => GetPreference,
        update_preference => UpdatePreference,
    }
    /// Account and transaction search.
    Search => search("search") {
        search_accounts => SearchAccounts,
        search_transactions => SearchTransactions,
    }
    /// Tags.
    Tags => tags("tags") {
        list_tag => ListTag,
        store_tag => StoreTag,
        get_tag => GetTag,
        update_tag => UpdateTag,
        delete_tag => DeleteTag,
        list_transaction_by_tag => ListTransactionByTag,
    }
    /// Transactions and their splits.
    Transactions => transactions("transactions") {
        list_transaction => ListTransaction,
        store_transaction => StoreTransaction,
        get_transaction => GetTransaction,
        update_transaction => UpdateTransaction,
        delete_transaction => DeleteTransaction,
        list_attachment_by_transaction => ListAttachmentByTransaction,
    }
    /// Webhooks, their messages and delivery attempts.
    Webhooks => webhooks("webhooks") {
        list_webhook => ListWebhook,
        store_webhook => StoreWebhook,
        get_webhook => GetWebhook,
        update_webhook => UpdateWebhook,
        delete_webhook => DeleteWebhook,
        submit_webhook => SubmitWebhook,
        trigger_transaction_webhook => TriggerTransactionWebhook,
        get_webhook_messages => GetWebhookMessages,
        get_single_webhook_message => GetSingleWebhookMessage,
        delete_webhook_message => DeleteWebhookMessage,
        get_webhook_message_attempts => GetWebhookMessageAttempts,
        get_single_webhook_message_attempt => GetSingleWebhookMessageAttempt,
        delete_webhook_message_attempt => DeleteWebhookMessageAttempt,
    }
    /// Rules with their triggers and actions.
    Rules => rules("rules") {
        list_rule => ListRule,
        store_rule => StoreRule,
        get_rule => GetRule,
        update_rule => UpdateRule,
        delete_rule => DeleteRule,
        test_rule => TestRule,
        fire_rule => FireRule,
    }
    /// Rule groups.
    RuleGroups => rule_groups("rule_groups") {
        list_rule_group => ListRuleGroup,
        store_rule_group => StoreRuleGroup,
        get_rule_group => GetRuleGroup,
        update_rule_group => UpdateRuleGroup,
        delete_rule_group => DeleteRuleGroup,
        list_rule_by_group => ListRuleByGroup,
        test_rule_group => TestRuleGroup,
        fire_rule_group => FireRuleGroup,
    }
    /// Recurring transactions.
    Recurrences => recurrences("recurrences") {
        list_recurrence => ListRecurrence,
        store_recurrence => StoreRecurrence,
        get_recurrence => GetRecurrence,
        update_recurrence => UpdateRecurrence,
        delete_recurrence => DeleteRecurrence,
        list_transaction_by_recurrence => ListTransactionByRecurrence,
    }
    /// Piggy banks and their events.
    PiggyBanks => piggy_banks("piggy_banks") {
        list_piggy_bank => ListPiggyBank,
        store_piggy_bank => StorePiggyBank,
        get_piggy_bank => GetPiggyBank,
        update_piggy_bank => UpdatePiggyBank,
        delete_piggy_bank => DeletePiggyBank,
        list_event_by_piggy_bank => ListEventByPiggyBank,
        list_attachment_by_piggy_bank => ListAttachmentByPiggyBank,
    }
    /// Budgets.
    Budgets => budgets("budgets") {
        list_budget => ListBudget,
        store_budget => StoreBudget,
        get_budget => GetBudget,
        update_budget => UpdateBudget,
        delete_budget => DeleteBudget,
        list_transaction_by_budget => ListTransactionByBudget,
        list_attachment_by_budget => ListAttachmentByBudget,
    }
    /// Bills.
    Bills => bills("bills") {
        list_bill => ListBill,
        store_bill => StoreBill,
        get_bill => GetBill,
        update_bill => UpdateBill,
        delete_bill => DeleteBill,
        list_attachment_by_bill => ListAttachmentByBill,
        list_rule_by_bill => ListRuleByBill,
        list_transaction_by_bill => ListTransactionByBill,
    }
    /// Link types and links between transactions.
    Links => links("links") {
        list_link_type => ListLinkType,
        store_link_type => StoreLinkType,
        get_link_type => GetLinkType,
        update_link_type => UpdateLinkType,
        delete_link_type => DeleteLinkType,
        list_transaction_by_link_type => ListTransactionByLinkType,
        list_transaction_link => ListTransactionLink,
        store_transaction_link => StoreTransactionLink,
        get_transaction_link => GetTransactionLink,
        update_transaction_link => UpdateTransactionLink,
        delete_transaction_link => DeleteTransactionLink,
    }
    /// User management.
    Users => users("users") {
        list_user => ListUser,
        store_user => StoreUser,
        get_user => GetUser,
        update_user => UpdateUser,
        delete_user => DeleteUser,
    }
    /// Basic summary and the account overview chart.
    Summary => summary("summary") {
        get_basic_summary => GetBasicSummary,
        get_chart_account_overview => GetChartAccountOverview,
    }
}
