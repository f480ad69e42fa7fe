pub mod get_dict_items;
pub mod get_dict_options;
pub mod list_dict_types;
