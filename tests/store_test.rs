#[cfg(test)]
mod memory_store {
    use tenancy::{
        Apartment, ApartmentId, ApartmentStore, MemoryApartmentStore, Renter, Room, RoomKind,
    };

    fn apartment() -> Apartment {
        let mut a1 = Apartment::new("a1");
        a1.add_room(Room::parse("bedroom", "10", "10").unwrap());
        a1.add_room(Room::parse("living room", "10", "10").unwrap());
        a1.add_room(Room::parse("bathroom", "10", "10").unwrap());
        a1.add_room(Room::parse("walk-in closet", "2", "3.5").unwrap());
        a1.add_renter(
            Renter::parse("bob", "35", "m", "social worker")
                .unwrap()
                .with_cash(1000.0)
                .unwrap(),
        );
        a1.add_renter(
            Renter::parse("jim", "19", "m", "movie star")
                .unwrap()
                .with_cash(12.5)
                .unwrap(),
        );
        a1
    }

    #[test]
    fn first_save_assigns_id() {
        let mut store = MemoryApartmentStore::new();
        let mut a1 = apartment();

        let id = store.save(&mut a1).unwrap();

        assert_eq!(a1.id.as_ref(), Some(&id));
        assert_eq!(store.len(), 1);
        assert_eq!(store.save(&mut a1).unwrap(), id);
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn save_then_load_round_trip() {
        let mut store = MemoryApartmentStore::new();
        let mut a1 = apartment();
        a1.collect_rent().unwrap();
        assert_eq!(a1.evicted_count(), 1);

        let id = store.save(&mut a1).unwrap();
        let loaded = store.load(&id).unwrap().unwrap();

        assert_eq!(loaded, a1);
        assert_eq!(loaded.renters[1].cash(), 12.5);
        assert!(loaded.renters[1].is_evicted());
        assert_eq!(loaded.rooms[3].kind().to_string(), "walk-in closet");
    }

    #[test]
    fn rooms_built_in_code_load_back() {
        let mut store = MemoryApartmentStore::new();
        let mut a1 = Apartment::new("a1");
        a1.add_room(Room::new("bedroom", 10.0, 12.0).unwrap());
        a1.add_room(Room::new(RoomKind::Other("bedroom".to_string()), 9.0, 9.0).unwrap());
        a1.add_room(Room::new(RoomKind::Other(" Sauna ".to_string()), 2.0, 2.5).unwrap());
        a1.add_renter(
            Renter::new("bob", 35, "m", "social worker")
                .unwrap()
                .with_cash(100.0)
                .unwrap(),
        );
        assert!(Room::new("  ", 10.0, 10.0).is_err());

        let id = store.save(&mut a1).unwrap();
        let loaded = store.load(&id).unwrap().unwrap();

        assert_eq!(loaded, a1);
        assert_eq!(loaded.bedrooms(), 2);
        assert_eq!(loaded.bedrooms(), a1.bedrooms());
        assert_eq!(loaded.is_available(), a1.is_available());
    }

    #[test]
    fn later_saves_overwrite_document() {
        let mut store = MemoryApartmentStore::new();
        let mut a1 = apartment();
        let id = store.save(&mut a1).unwrap();

        a1.collect_rent().unwrap();
        a1.purge_evicted();
        store.save(&mut a1).unwrap();

        let loaded = store.load(&id).unwrap().unwrap();
        assert_eq!(loaded.renters.len(), 1);
        assert_eq!(loaded.renters[0].name(), "bob");
    }

    #[test]
    fn stored_snapshot_is_detached() {
        let mut store = MemoryApartmentStore::new();
        let mut a1 = apartment();
        let id = store.save(&mut a1).unwrap();

        a1.renters.clear();

        assert_eq!(store.load(&id).unwrap().unwrap().renters.len(), 2);
    }

    #[test]
    fn missing_and_deleted() {
        let mut store = MemoryApartmentStore::new();
        assert!(store.load(&ApartmentId::generate()).unwrap().is_none());

        let mut a1 = apartment();
        let mut a2 = Apartment::new("a2");
        let id = store.save(&mut a1).unwrap();
        let other = store.save(&mut a2).unwrap();
        assert_eq!(store.list().unwrap().len(), 2);

        assert!(store.delete(&id).unwrap());
        assert!(!store.delete(&id).unwrap());
        assert!(store.load(&id).unwrap().is_none());
        assert_eq!(store.list().unwrap(), vec![other]);
    }

    #[test]
    fn document_shape() {
        let mut store = MemoryApartmentStore::new();
        let mut a1 = apartment();
        store.save(&mut a1).unwrap();

        let document = serde_json::to_value(&a1).unwrap();
        assert_eq!(document["name"], "a1");
        assert_eq!(document["rooms"][0]["kind"], "bedroom");
        assert_eq!(document["rooms"][0]["length"], 10.0);
        assert_eq!(document["renters"][0]["cash"], 1000.0);
        assert_eq!(document["renters"][0]["is_evicted"], false);
        assert_eq!(document["id"], a1.id.unwrap().to_string());
    }
}
