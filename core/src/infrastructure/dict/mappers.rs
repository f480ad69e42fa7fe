use crate::{
    domain::dict::entities::{DictItem, DictType},
    entity::{sys_dict, sys_dict_item},
};

impl From<sys_dict::Model> for DictType {
    fn from(model: sys_dict::Model) -> Self {
        Self {
            id: model.id,
            dict_code: model.dict_code,
            name: model.name,
            status: model.status,
            remark: model.remark,
            create_time: model.create_time,
            update_time: model.update_time,
        }
    }
}

impl From<sys_dict_item::Model> for DictItem {
    fn from(model: sys_dict_item::Model) -> Self {
        Self {
            id: model.id,
            dict_code: model.dict_code,
            value: model.value,
            label: model.label,
            tag_type: model.tag_type,
            status: model.status,
            sort: model.sort,
            remark: model.remark,
            create_time: model.create_time,
            update_time: model.update_time,
        }
    }
}
