use clap::{Parser, Subcommand, ValueEnum};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Storefront client for the shop backend")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Browse the catalog
    Products {
        /// Narrow the listing with a search query
        #[arg(long)]
        search: Option<String>,
    },
    /// Show one product
    Product { id: String },
    /// Manage the session cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Run the checkout flow
    Checkout {
        #[command(subcommand)]
        action: CheckoutAction,
    },
    /// Track orders
    Orders {
        #[command(subcommand)]
        action: Option<OrdersAction>,
    },
    /// Notification inbox
    Notifications {
        #[command(subcommand)]
        action: Option<NotificationsAction>,
    },
    /// Server-side wishlist
    Wishlist {
        #[command(subcommand)]
        action: Option<WishlistAction>,
    },
    /// Account overview with order counts
    Dashboard,
    /// Admin surface: sales analytics and product management
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
    /// Live inbox view with background polling
    Watch,
}

#[derive(Debug, Subcommand)]
pub enum CartAction {
    /// Show cart lines and totals
    Show,
    /// Add a product to the cart (merges into an existing line)
    Add {
        product_id: String,
        #[arg(long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a line (0 removes it)
    Update { product_id: String, quantity: u32 },
    /// Remove a line
    Remove { product_id: String },
    /// Verify and apply a coupon code
    Coupon { code: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PaymentArg {
    /// Pay the courier on delivery
    Cod,
    /// Pay through the external payment gateway
    Electronic,
}

#[derive(Debug, Subcommand)]
pub enum CheckoutAction {
    /// Walk the delivery/payment/confirmation steps and place the order
    Place {
        #[arg(long)]
        name: String,
        #[arg(long)]
        phone: String,
        #[arg(long)]
        address: String,
        #[arg(long, default_value = "")]
        city: String,
        #[arg(long)]
        note: Option<String>,
        #[arg(long, value_enum, default_value = "cod")]
        payment: PaymentArg,
    },
    /// Complete an electronic payment after the gateway redirect
    Finalize {
        /// The full return URL from the payment gateway
        return_url: String,
    },
}

#[derive(Debug, Subcommand)]
pub enum OrdersAction {
    /// List all orders
    List,
    /// Show one order with its lines
    Show { id: String },
    /// Cancel an order
    Cancel { id: String },
    /// Request a refund
    Refund { id: String },
}

#[derive(Debug, Subcommand)]
pub enum NotificationsAction {
    /// List a page of the inbox
    List {
        #[arg(long, default_value_t = 0)]
        page: u32,
        #[arg(long, default_value_t = 20)]
        size: u32,
    },
    /// Mark one notification as read
    MarkRead { id: String },
    /// Mark the whole inbox as read
    MarkAllRead,
    /// Delete a notification
    Delete { id: String },
}

#[derive(Debug, Subcommand)]
pub enum WishlistAction {
    /// List wishlist products
    List,
    /// Add a product
    Add { product_id: String },
    /// Remove a product
    Remove { product_id: String },
}

#[derive(Debug, Subcommand)]
pub enum AdminAction {
    /// Monthly sales analytics
    Stats {
        #[arg(long)]
        month: u32,
        #[arg(long)]
        year: i32,
    },
    /// Create a product, optionally uploading an image
    CreateProduct {
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        in_stock: bool,
        /// Path to an image file to attach
        #[arg(long)]
        image: Option<std::path::PathBuf>,
    },
    /// Update a product
    UpdateProduct {
        id: String,
        #[arg(long)]
        name: String,
        #[arg(long)]
        price: String,
        #[arg(long, default_value = "")]
        description: String,
        #[arg(long)]
        category: Option<String>,
        #[arg(long, action = clap::ArgAction::Set, default_value_t = true)]
        in_stock: bool,
        #[arg(long)]
        image: Option<std::path::PathBuf>,
    },
    /// Delete a product
    DeleteProduct { id: String },
}
