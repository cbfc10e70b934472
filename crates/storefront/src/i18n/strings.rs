//! Static translation tables, one per supported locale.
//!
//! All three tables carry the same key set; `items_count` and `welcome` use
//! `{{placeholder}}` substitution.

use std::collections::HashMap;
use std::sync::LazyLock;

use megashop_core::Locale;

type Table = HashMap<&'static str, &'static str>;

static RU: LazyLock<Table> = LazyLock::new(|| {
    HashMap::from([
        ("app_title", "MegaShop — демонстрационный интернет-магазин"),
        ("home", "Главная"),
        ("products", "Товары"),
        ("cart", "Корзина"),
        ("account", "Аккаунт"),
        ("admin", "Админ"),
        ("settings", "Настройки"),
        ("search", "Поиск..."),
        ("add_to_cart", "В корзину"),
        ("price", "Цена"),
        ("pcs", "шт."),
        ("total", "Итого"),
        ("checkout", "Оформить"),
        ("empty_cart", "Корзина пуста"),
        ("login", "Войти"),
        ("logout", "Выйти"),
        ("welcome", "Добро пожаловать, {{name}}!"),
        ("theme", "Тема"),
        ("language", "Язык"),
        ("light", "Светлая"),
        ("dark", "Тёмная"),
        ("save", "Сохранить"),
        ("you_are_admin", "Вы администратор — здесь можно управлять товарами."),
        ("only_admin", "Доступно только админам"),
        ("add_product", "Добавить товар"),
        ("name", "Название"),
        ("create", "Создать"),
        ("filters", "Фильтры"),
        ("category", "Категория"),
        ("min_price", "Мин. цена"),
        ("max_price", "Макс. цена"),
        ("reset", "Сбросить"),
        ("items_count", "Товаров: {{n}}"),
        ("fill_all_fields", "Заполните все поля"),
        ("product_created", "Создано: {{name}} ({{price}})"),
    ])
});

static UZ: LazyLock<Table> = LazyLock::new(|| {
    HashMap::from([
        ("app_title", "MegaShop — namoyish uchun onlayn-do'kon"),
        ("home", "Bosh sahifa"),
        ("products", "Mahsulotlar"),
        ("cart", "Savat"),
        ("account", "Profil"),
        ("admin", "Admin"),
        ("settings", "Sozlamalar"),
        ("search", "Qidiruv..."),
        ("add_to_cart", "Savatga qo'shish"),
        ("price", "Narx"),
        ("pcs", "dona"),
        ("total", "Jami"),
        ("checkout", "Buyurtma"),
        ("empty_cart", "Savat bo'sh"),
        ("login", "Kirish"),
        ("logout", "Chiqish"),
        ("welcome", "Xush kelibsiz, {{name}}!"),
        ("theme", "Mavzu"),
        ("language", "Til"),
        ("light", "Oq"),
        ("dark", "Qora"),
        ("save", "Saqlash"),
        ("you_are_admin", "Siz admin — mahsulotlarni boshqarish mumkin."),
        ("only_admin", "Faqat adminlar uchun"),
        ("add_product", "Mahsulot qo'shish"),
        ("name", "Nomi"),
        ("create", "Yaratish"),
        ("filters", "Filtrlar"),
        ("category", "Kategoriya"),
        ("min_price", "Min narx"),
        ("max_price", "Maks narx"),
        ("reset", "Tozalash"),
        ("items_count", "Mahsulotlar: {{n}}"),
        ("fill_all_fields", "Barcha maydonlarni to'ldiring"),
        ("product_created", "Yaratildi: {{name}} ({{price}})"),
    ])
});

static EN: LazyLock<Table> = LazyLock::new(|| {
    HashMap::from([
        ("app_title", "MegaShop — demo online store"),
        ("home", "Home"),
        ("products", "Products"),
        ("cart", "Cart"),
        ("account", "Account"),
        ("admin", "Admin"),
        ("settings", "Settings"),
        ("search", "Search..."),
        ("add_to_cart", "Add to cart"),
        ("price", "Price"),
        ("pcs", "pcs"),
        ("total", "Total"),
        ("checkout", "Checkout"),
        ("empty_cart", "Cart is empty"),
        ("login", "Login"),
        ("logout", "Logout"),
        ("welcome", "Welcome, {{name}}!"),
        ("theme", "Theme"),
        ("language", "Language"),
        ("light", "Light"),
        ("dark", "Dark"),
        ("save", "Save"),
        ("you_are_admin", "You are admin — manage products here."),
        ("only_admin", "Admins only"),
        ("add_product", "Add product"),
        ("name", "Name"),
        ("create", "Create"),
        ("filters", "Filters"),
        ("category", "Category"),
        ("min_price", "Min price"),
        ("max_price", "Max price"),
        ("reset", "Reset"),
        ("items_count", "Items: {{n}}"),
        ("fill_all_fields", "Fill in all fields"),
        ("product_created", "Created: {{name}} ({{price}})"),
    ])
});

/// The translation table for a locale.
pub(super) fn table(locale: Locale) -> &'static Table {
    match locale {
        Locale::Ru => &RU,
        Locale::Uz => &UZ,
        Locale::En => &EN,
    }
}
