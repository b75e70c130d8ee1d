use std::sync::Arc;

use logger::TracingLogger;
use session_store::{CartRepositoryInMemory, FileSessionStore};

use backend_api::admin::AdminGatewayHttp;
use backend_api::client::ApiClient;
use backend_api::coupons::CouponGatewayHttp;
use backend_api::notifications::NotificationGatewayHttp;
use backend_api::orders::OrderGatewayHttp;
use backend_api::products::ProductGatewayHttp;
use backend_api::wishlist::WishlistGatewayHttp;

use business::application::admin::create_product::CreateProductUseCaseImpl;
use business::application::admin::dashboard_stats::DashboardStatsUseCaseImpl;
use business::application::admin::delete_product::DeleteProductUseCaseImpl;
use business::application::admin::update_product::UpdateProductUseCaseImpl;
use business::application::cart::add_item::AddCartItemUseCaseImpl;
use business::application::cart::apply_coupon::ApplyCouponUseCaseImpl;
use business::application::cart::get_cart::GetCartUseCaseImpl;
use business::application::cart::remove_item::RemoveCartItemUseCaseImpl;
use business::application::cart::update_quantity::UpdateQuantityUseCaseImpl;
use business::application::checkout::finalize_payment::{
    FinalizePaymentUseCaseImpl, ORDER_CREATED_FLAG_TTL,
};
use business::application::checkout::place_order::PlaceOrderUseCaseImpl;
use business::application::notification::delete::DeleteNotificationUseCaseImpl;
use business::application::notification::get_inbox::GetInboxUseCaseImpl;
use business::application::notification::hub::NotificationHub;
use business::application::notification::mark_all_as_read::MarkAllAsReadUseCaseImpl;
use business::application::notification::mark_as_read::MarkAsReadUseCaseImpl;
use business::application::order::cancel::CancelOrderUseCaseImpl;
use business::application::order::get_all::GetAllOrdersUseCaseImpl;
use business::application::order::get_by_id::GetOrderByIdUseCaseImpl;
use business::application::order::refund::RefundOrderUseCaseImpl;
use business::application::order::summary::OrderSummaryUseCaseImpl;
use business::application::product::browse::BrowseProductsUseCaseImpl;
use business::application::product::get_by_id::GetProductByIdUseCaseImpl;
use business::application::wishlist::add::AddToWishlistUseCaseImpl;
use business::application::wishlist::get_all::GetWishlistUseCaseImpl;
use business::application::wishlist::remove::RemoveFromWishlistUseCaseImpl;

use business::domain::admin::use_cases::create_product::CreateProductUseCase;
use business::domain::admin::use_cases::dashboard_stats::DashboardStatsUseCase;
use business::domain::admin::use_cases::delete_product::DeleteProductUseCase;
use business::domain::admin::use_cases::update_product::UpdateProductUseCase;
use business::domain::cart::use_cases::add_item::AddCartItemUseCase;
use business::domain::cart::use_cases::apply_coupon::ApplyCouponUseCase;
use business::domain::cart::use_cases::get_cart::GetCartUseCase;
use business::domain::cart::use_cases::remove_item::RemoveCartItemUseCase;
use business::domain::cart::use_cases::update_quantity::UpdateQuantityUseCase;
use business::domain::checkout::use_cases::finalize_payment::FinalizePaymentUseCase;
use business::domain::checkout::use_cases::place_order::PlaceOrderUseCase;
use business::domain::notification::bus::InvalidationBus;
use business::domain::notification::use_cases::delete::DeleteNotificationUseCase;
use business::domain::notification::use_cases::get_inbox::GetInboxUseCase;
use business::domain::notification::use_cases::mark_all_as_read::MarkAllAsReadUseCase;
use business::domain::notification::use_cases::mark_as_read::MarkAsReadUseCase;
use business::domain::order::use_cases::cancel::CancelOrderUseCase;
use business::domain::order::use_cases::get_all::GetAllOrdersUseCase;
use business::domain::order::use_cases::get_by_id::GetOrderByIdUseCase;
use business::domain::order::use_cases::refund::RefundOrderUseCase;
use business::domain::order::use_cases::summary::OrderSummaryUseCase;
use business::domain::product::use_cases::browse::BrowseProductsUseCase;
use business::domain::product::use_cases::get_by_id::GetProductByIdUseCase;
use business::domain::wishlist::use_cases::add::AddToWishlistUseCase;
use business::domain::wishlist::use_cases::get_all::GetWishlistUseCase;
use business::domain::wishlist::use_cases::remove::RemoveFromWishlistUseCase;

use crate::config::app_config::AppConfig;

pub struct DependencyContainer {
    /// Base URL kept for templated asset paths (product images).
    pub backend_base_url: String,

    pub browse_products: Arc<dyn BrowseProductsUseCase>,
    pub get_product: Arc<dyn GetProductByIdUseCase>,

    pub get_cart: Arc<dyn GetCartUseCase>,
    pub add_item: Arc<dyn AddCartItemUseCase>,
    pub update_quantity: Arc<dyn UpdateQuantityUseCase>,
    pub remove_item: Arc<dyn RemoveCartItemUseCase>,
    pub apply_coupon: Arc<dyn ApplyCouponUseCase>,

    pub place_order: Arc<dyn PlaceOrderUseCase>,
    pub finalize_payment: Arc<dyn FinalizePaymentUseCase>,

    pub get_all_orders: Arc<dyn GetAllOrdersUseCase>,
    pub get_order: Arc<dyn GetOrderByIdUseCase>,
    pub cancel_order: Arc<dyn CancelOrderUseCase>,
    pub refund_order: Arc<dyn RefundOrderUseCase>,
    pub order_summary: Arc<dyn OrderSummaryUseCase>,

    pub hub: Arc<NotificationHub>,
    pub get_inbox: Arc<dyn GetInboxUseCase>,
    pub mark_as_read: Arc<dyn MarkAsReadUseCase>,
    pub mark_all_as_read: Arc<dyn MarkAllAsReadUseCase>,
    pub delete_notification: Arc<dyn DeleteNotificationUseCase>,

    pub get_wishlist: Arc<dyn GetWishlistUseCase>,
    pub add_to_wishlist: Arc<dyn AddToWishlistUseCase>,
    pub remove_from_wishlist: Arc<dyn RemoveFromWishlistUseCase>,

    pub dashboard_stats: Arc<dyn DashboardStatsUseCase>,
    pub create_product: Arc<dyn CreateProductUseCase>,
    pub update_product: Arc<dyn UpdateProductUseCase>,
    pub delete_product: Arc<dyn DeleteProductUseCase>,
}

impl DependencyContainer {
    pub fn new(config: &AppConfig) -> Self {
        let logger = Arc::new(TracingLogger);
        let bus = InvalidationBus::new();

        // Infrastructure adapters
        let api = || {
            ApiClient::new(
                config.backend.base_url.clone(),
                config.backend.bearer_token.clone(),
            )
        };
        let products_gateway = Arc::new(ProductGatewayHttp::new(api()));
        let coupons_gateway = Arc::new(CouponGatewayHttp::new(api()));
        let orders_gateway = Arc::new(OrderGatewayHttp::new(api()));
        let notifications_gateway = Arc::new(NotificationGatewayHttp::new(api()));
        let wishlist_gateway = Arc::new(WishlistGatewayHttp::new(api()));
        let admin_gateway = Arc::new(AdminGatewayHttp::new(api()));

        let cart_repository = Arc::new(CartRepositoryInMemory::new());
        let session_store = Arc::new(FileSessionStore::new(config.session.dir.clone()));

        let hub = Arc::new(NotificationHub::new(
            notifications_gateway.clone(),
            logger.clone(),
            bus.clone(),
        ));

        // Catalog use cases
        let browse_products = Arc::new(BrowseProductsUseCaseImpl {
            products: products_gateway.clone(),
            logger: logger.clone(),
        });
        let get_product = Arc::new(GetProductByIdUseCaseImpl {
            products: products_gateway,
        });

        // Cart use cases
        let get_cart = Arc::new(GetCartUseCaseImpl {
            repository: cart_repository.clone(),
        });
        let add_item = Arc::new(AddCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let update_quantity = Arc::new(UpdateQuantityUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let remove_item = Arc::new(RemoveCartItemUseCaseImpl {
            repository: cart_repository.clone(),
            logger: logger.clone(),
        });
        let apply_coupon = Arc::new(ApplyCouponUseCaseImpl {
            repository: cart_repository.clone(),
            coupons: coupons_gateway,
            logger: logger.clone(),
        });

        // Checkout use cases
        let place_order = Arc::new(PlaceOrderUseCaseImpl {
            cart: cart_repository.clone(),
            orders: orders_gateway.clone(),
            session: session_store.clone(),
            logger: logger.clone(),
        });
        let finalize_payment = Arc::new(FinalizePaymentUseCaseImpl {
            cart: cart_repository,
            orders: orders_gateway.clone(),
            session: session_store,
            logger: logger.clone(),
            flag_ttl: ORDER_CREATED_FLAG_TTL,
        });

        // Order use cases
        let get_all_orders = Arc::new(GetAllOrdersUseCaseImpl {
            orders: orders_gateway.clone(),
            logger: logger.clone(),
        });
        let get_order = Arc::new(GetOrderByIdUseCaseImpl {
            orders: orders_gateway.clone(),
        });
        let cancel_order = Arc::new(CancelOrderUseCaseImpl {
            orders: orders_gateway.clone(),
            bus: bus.clone(),
            logger: logger.clone(),
        });
        let refund_order = Arc::new(RefundOrderUseCaseImpl {
            orders: orders_gateway.clone(),
            bus,
            logger: logger.clone(),
        });
        let order_summary = Arc::new(OrderSummaryUseCaseImpl {
            orders: orders_gateway,
        });

        // Notification use cases
        let get_inbox = Arc::new(GetInboxUseCaseImpl {
            gateway: notifications_gateway,
            logger: logger.clone(),
        });
        let mark_as_read = Arc::new(MarkAsReadUseCaseImpl { hub: hub.clone() });
        let mark_all_as_read = Arc::new(MarkAllAsReadUseCaseImpl { hub: hub.clone() });
        let delete_notification = Arc::new(DeleteNotificationUseCaseImpl { hub: hub.clone() });

        // Wishlist use cases
        let get_wishlist = Arc::new(GetWishlistUseCaseImpl {
            wishlist: wishlist_gateway.clone(),
        });
        let add_to_wishlist = Arc::new(AddToWishlistUseCaseImpl {
            wishlist: wishlist_gateway.clone(),
            logger: logger.clone(),
        });
        let remove_from_wishlist = Arc::new(RemoveFromWishlistUseCaseImpl {
            wishlist: wishlist_gateway,
            logger: logger.clone(),
        });

        // Admin use cases
        let dashboard_stats = Arc::new(DashboardStatsUseCaseImpl {
            admin: admin_gateway.clone(),
            logger: logger.clone(),
        });
        let create_product = Arc::new(CreateProductUseCaseImpl {
            admin: admin_gateway.clone(),
            logger: logger.clone(),
        });
        let update_product = Arc::new(UpdateProductUseCaseImpl {
            admin: admin_gateway.clone(),
            logger: logger.clone(),
        });
        let delete_product = Arc::new(DeleteProductUseCaseImpl {
            admin: admin_gateway,
            logger,
        });

        Self {
            backend_base_url: config.backend.base_url.clone(),
            browse_products,
            get_product,
            get_cart,
            add_item,
            update_quantity,
            remove_item,
            apply_coupon,
            place_order,
            finalize_payment,
            get_all_orders,
            get_order,
            cancel_order,
            refund_order,
            order_summary,
            hub,
            get_inbox,
            mark_as_read,
            mark_all_as_read,
            delete_notification,
            get_wishlist,
            add_to_wishlist,
            remove_from_wishlist,
            dashboard_stats,
            create_product,
            update_product,
            delete_product,
        }
    }
}
