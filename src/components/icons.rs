//! Centralized icon definitions.
//!
//! Icon theme is configured in `config.rs` via `ICON_THEME`.
//! This module maps semantic icon names to the selected theme's icons.

use icondata::Icon;
use meto_core::models::IconKey;

use crate::config::IconTheme;

// =============================================================================
// Theme Imports
// =============================================================================

mod lucide {
    pub use icondata::{
        LuActivity as Analytics, LuArrowDown as ArrowDown, LuArrowRight as ArrowRight,
        LuArrowUp as ArrowUp, LuBell as Bell, LuBox as Box, LuTrendingUp as BarChart,
        LuChevronLeft as ChevronLeft, LuChevronRight as ChevronRight, LuCircleAlert as Alert,
        LuCircleCheck as Check, LuClock as Clock, LuDollarSign as Money, LuDownload as Download,
        LuEllipsisVertical as More, LuEye as Eye, LuEyeOff as EyeOff, LuFileText as FileList,
        LuGlobe as Globe, LuHeadphones as Support, LuLayoutDashboard as Dashboard, LuLock as Lock,
        LuMail as Mail, LuMapPin as Location, LuMenu as Menu, LuPalette as Palette,
        LuPencil as Edit, LuPhone as Phone, LuPlus as Plus, LuSave as Save, LuSearch as Search,
        LuSettings as Settings, LuShoppingBag as Bag, LuShoppingCart as Cart,
        LuSlidersHorizontal as Filter, LuSmile as Smile, LuStore as Store, LuSun as Sun,
        LuMoon as Moon, LuTrash2 as Delete, LuUser as User, LuUserCog as Profile,
        LuUserPlus as UserPlus, LuUsers as Customers, LuPackage as Products, LuX as Close,
        LuCalendar as Calendar,
    };
}

mod bootstrap {
    pub use icondata::{
        BsActivity as Analytics, BsArrowDown as ArrowDown, BsArrowRight as ArrowRight,
        BsArrowUp as ArrowUp, BsBag as Bag, BsBarChart as BarChart, BsBell as Bell, BsBox as Box,
        BsBoxSeam as Products, BsCalendar as Calendar, BsCart3 as Cart,
        BsCheckCircle as Check, BsChevronLeft as ChevronLeft, BsChevronRight as ChevronRight,
        BsClock as Clock, BsCurrencyDollar as Money, BsDownload as Download,
        BsEmojiSmile as Smile, BsEnvelope as Mail, BsExclamationCircle as Alert,
        BsEye as Eye, BsEyeSlash as EyeOff,
        BsFileText as FileList, BsGearFill as Settings, BsGeoAltFill as Location,
        BsGlobe as Globe, BsGrid1x2 as Dashboard, BsHeadset as Support, BsList as Menu,
        BsLockFill as Lock, BsMoon as Moon, BsPalette as Palette, BsPencil as Edit,
        BsPeople as Customers, BsPerson as User, BsPersonGear as Profile,
        BsPersonPlus as UserPlus, BsPlusLg as Plus, BsSave as Save, BsSearch as Search,
        BsShop as Store, BsSliders as Filter, BsSun as Sun, BsTelephone as Phone,
        BsThreeDotsVertical as More, BsTrash as Delete, BsXLg as Close,
    };
}

// =============================================================================
// Icon Constants (selected based on theme)
// =============================================================================

macro_rules! themed_icon {
    ($name:ident, $theme_name:ident) => {
        pub const $name: Icon = match crate::config::ICON_THEME {
            IconTheme::Lucide => lucide::$theme_name,
            IconTheme::Bootstrap => bootstrap::$theme_name,
        };
    };
}

// Navigation
themed_icon!(DASHBOARD, Dashboard);
themed_icon!(CART, Cart);
themed_icon!(STORE, Store);
themed_icon!(CUSTOMERS, Customers);
themed_icon!(ANALYTICS, Analytics);
themed_icon!(SETTINGS, Settings);
themed_icon!(CHEVRON_LEFT, ChevronLeft);
themed_icon!(CHEVRON_RIGHT, ChevronRight);
themed_icon!(MENU, Menu);
themed_icon!(CLOSE, Close);

// Stat cards
themed_icon!(MONEY, Money);
themed_icon!(BAG, Bag);
themed_icon!(SMILE, Smile);
themed_icon!(EYE, Eye);
themed_icon!(FILE_LIST, FileList);
themed_icon!(USER, User);
themed_icon!(BOX, Box);
themed_icon!(SUPPORT, Support);
themed_icon!(BAR_CHART, BarChart);
themed_icon!(PRODUCTS, Products);
themed_icon!(ARROW_UP, ArrowUp);
themed_icon!(ARROW_DOWN, ArrowDown);

// Status glyphs
themed_icon!(CHECK, Check);
themed_icon!(CLOCK, Clock);
themed_icon!(ALERT, Alert);

// Toolbars and row actions
themed_icon!(SEARCH, Search);
themed_icon!(FILTER, Filter);
themed_icon!(PLUS, Plus);
themed_icon!(USER_PLUS, UserPlus);
themed_icon!(DOWNLOAD, Download);
themed_icon!(CALENDAR, Calendar);
themed_icon!(ARROW_RIGHT, ArrowRight);
themed_icon!(EDIT, Edit);
themed_icon!(DELETE, Delete);
themed_icon!(MORE, More);
themed_icon!(MAIL, Mail);
themed_icon!(PHONE, Phone);
themed_icon!(LOCATION, Location);

// Settings
themed_icon!(PROFILE, Profile);
themed_icon!(LOCK, Lock);
themed_icon!(BELL, Bell);
themed_icon!(PALETTE, Palette);
themed_icon!(GLOBE, Globe);
themed_icon!(EYE_OFF, EyeOff);
themed_icon!(SUN, Sun);
themed_icon!(MOON, Moon);
themed_icon!(SAVE, Save);

/// Glyph for a symbolic icon reference from the data files.
pub fn for_key(key: IconKey) -> Icon {
    match key {
        IconKey::Dashboard => DASHBOARD,
        IconKey::Orders => CART,
        IconKey::Products => PRODUCTS,
        IconKey::Customers => CUSTOMERS,
        IconKey::Analytics => ANALYTICS,
        IconKey::Settings => SETTINGS,
        IconKey::Money => MONEY,
        IconKey::Bag => BAG,
        IconKey::Smile => SMILE,
        IconKey::Eye => EYE,
        IconKey::FileList => FILE_LIST,
        IconKey::Cart => CART,
        IconKey::User => USER,
        IconKey::Store => STORE,
        IconKey::Box => BOX,
        IconKey::Support => SUPPORT,
        IconKey::BarChart => BAR_CHART,
    }
}
