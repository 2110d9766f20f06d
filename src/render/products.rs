//! Products section: search bar, add button and the product table

use maud::{html, Markup};

use crate::dashboard::{DataSource, ProductsView, UiState};
use crate::models::Product;

const TABLE_COLUMNS: u8 = 7;

pub fn products_section(state: &UiState) -> Markup {
    html! {
        div.d-flex.justify-content-between.align-items-center.mb-4 {
            h2 { "Products" }
            a.btn.btn-primary href="/products/new" {
                i.fas.fa-plus.me-1 {}
                "Add Product"
            }
        }
        form.row.g-2.mb-3 method="get" action="/products" {
            div.col-md-6 {
                input.form-control id="productSearch" type="text" name="search"
                    placeholder="Search products..." value=(state.search_term);
            }
            div.col-auto {
                button.btn.btn-outline-secondary type="submit" {
                    i.fas.fa-search {}
                }
            }
        }
        @if state.products_view == ProductsView::Loaded(DataSource::Demo) {
            div.alert.alert-info.py-2 {
                "Backend unavailable, showing sample data."
            }
        }
        div.table-responsive {
            table.table.table-striped.table-hover {
                thead {
                    tr {
                        th { "SKU" }
                        th { "Name" }
                        th { "Category" }
                        th { "Price" }
                        th { "Stock" }
                        th { "Status" }
                        th { "Actions" }
                    }
                }
                tbody id="productsTableBody" {
                    (product_rows(state))
                }
            }
        }
    }
}

/// Table body rows for the current product list
pub fn product_rows(state: &UiState) -> Markup {
    match state.products_view {
        ProductsView::NotLoaded => message_row("Loading products...", "text-muted"),
        ProductsView::Failed => message_row("Failed to load products", "text-danger"),
        ProductsView::Loaded(_) if state.products.is_empty() => {
            message_row("No products found", "")
        }
        ProductsView::Loaded(_) => html! {
            @for product in &state.products {
                (product_row(product))
            }
        },
    }
}

fn message_row(text: &str, extra_class: &str) -> Markup {
    let class = format!("text-center {}", extra_class);

    html! {
        tr {
            td class=(class.trim_end()) colspan=(TABLE_COLUMNS) { (text) }
        }
    }
}

fn product_row(product: &Product) -> Markup {
    let status = product.stock_status();

    html! {
        tr {
            td { (product.sku) }
            td { (product.name) }
            td { (product.category_name()) }
            td {
                @match product.unit_price {
                    Some(price) => { "$" (format!("{:.2}", price)) },
                    None => { "N/A" },
                }
            }
            td { (product.stock_level()) }
            td {
                span class=(format!("badge bg-{}", status.badge_class())) { (status.label()) }
            }
            td {
                form.d-inline method="post" action=(format!("/products/{}/edit", product.id)) {
                    button.btn.btn-sm.btn-outline-primary.me-1 type="submit" title="Edit" {
                        i.fas.fa-edit {}
                    }
                }
                a.btn.btn-sm.btn-outline-danger href=(format!("/products/{}/delete", product.id)) title="Delete" {
                    i.fas.fa-trash {}
                }
            }
        }
    }
}
