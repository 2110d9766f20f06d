//! Add-product modal and delete confirmation
//!
//! Both dialogs are rendered open by the server (Bootstrap's `show` state)
//! and closed again by a POST back to the dashboard.

use maud::{html, Markup};

use crate::dashboard::UiState;

fn dialog(title: &str, cancel_action: &str, body: Markup, footer: Markup) -> Markup {
    html! {
        div.modal.fade.show.d-block tabindex="-1" role="dialog" aria-modal="true" {
            div.modal-dialog {
                div.modal-content {
                    div.modal-header {
                        h5.modal-title { (title) }
                        form method="post" action=(cancel_action) {
                            button.btn-close type="submit" aria-label="Close" {}
                        }
                    }
                    (body)
                    (footer)
                }
            }
        }
        div.modal-backdrop.fade.show {}
    }
}

/// The add-product form. Values the backend rejected are shown again so
/// the user can correct them.
pub fn add_product_modal(state: &UiState) -> Markup {
    if !state.add_product_modal.open {
        return html! {};
    }
    let form = &state.add_product_modal.form;

    let body = html! {
        div.modal-body {
            form id="addProductForm" method="post" action="/products" {
                div.row {
                    div.col-md-6.mb-3 {
                        label.form-label for="productSku" { "SKU" }
                        input.form-control id="productSku" type="text" name="sku" value=(form.sku) required;
                    }
                    div.col-md-6.mb-3 {
                        label.form-label for="productName" { "Name" }
                        input.form-control id="productName" type="text" name="name" value=(form.name) required;
                    }
                }
                div.mb-3 {
                    label.form-label for="productDescription" { "Description" }
                    textarea.form-control id="productDescription" name="description" rows="3" { (form.description) }
                }
                div.row {
                    div.col-md-6.mb-3 {
                        label.form-label for="productUnitPrice" { "Unit Price" }
                        input.form-control id="productUnitPrice" type="number" name="unit_price" value=(form.unit_price) step="0.01" min="0" required;
                    }
                    div.col-md-6.mb-3 {
                        label.form-label for="productCostPrice" { "Cost Price" }
                        input.form-control id="productCostPrice" type="number" name="cost_price" value=(form.cost_price) step="0.01" min="0" required;
                    }
                }
                div.row {
                    div.col-md-4.mb-3 {
                        label.form-label for="productMinStock" { "Min Stock" }
                        input.form-control id="productMinStock" type="number" name="min_stock_level" value=(form.min_stock_level) min="0" placeholder="0";
                    }
                    div.col-md-4.mb-3 {
                        label.form-label for="productMaxStock" { "Max Stock" }
                        input.form-control id="productMaxStock" type="number" name="max_stock_level" value=(form.max_stock_level) min="0" placeholder="1000";
                    }
                    div.col-md-4.mb-3 {
                        label.form-label for="productReorderPoint" { "Reorder Point" }
                        input.form-control id="productReorderPoint" type="number" name="reorder_point" value=(form.reorder_point) min="0" placeholder="10";
                    }
                }
            }
        }
    };

    let footer = html! {
        div.modal-footer {
            form method="post" action="/products/new/cancel" {
                button.btn.btn-secondary type="submit" { "Cancel" }
            }
            button.btn.btn-primary type="submit" form="addProductForm" { "Save Product" }
        }
    };

    dialog("Add New Product", "/products/new/cancel", body, footer)
}

/// Confirmation prompt for a pending delete
pub fn delete_confirmation(state: &UiState) -> Markup {
    let Some(id) = state.pending_delete else {
        return html! {};
    };

    let body = html! {
        div.modal-body {
            p { "Are you sure you want to delete this product?" }
            @if let Some(product) = state.product(id) {
                p.text-muted.mb-0 { (product.sku) " - " (product.name) }
            }
        }
    };

    let footer = html! {
        div.modal-footer {
            form method="post" action="/products/delete/cancel" {
                button.btn.btn-secondary type="submit" { "Cancel" }
            }
            form method="post" action=(format!("/products/{}/delete", id)) {
                input type="hidden" name="confirm" value="yes";
                button.btn.btn-danger type="submit" { "Delete" }
            }
        }
    };

    dialog("Delete Product", "/products/delete/cancel", body, footer)
}
