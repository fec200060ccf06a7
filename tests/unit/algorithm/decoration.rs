//! Tests for avatar, obstacle and exit placement

#[cfg(test)]
mod tests {
    use dungeongen::algorithm::decoration::{
        decorate, place_avatar, place_exits, place_obstacles,
    };
    use dungeongen::algorithm::selection::{build_candidates, select_spanning_corridors};
    use dungeongen::spatial::{Coordinate, Corridor, Room, Tile, TileGrid};
    use rand::{SeedableRng, rngs::StdRng};

    // Three 6x6 rooms with 16 interior cells each, joined and walled
    fn layout(seed: u64) -> (TileGrid, Vec<Room>, Vec<Corridor>) {
        let mut grid = TileGrid::new(40, 20);
        let mut rng = StdRng::seed_from_u64(seed);
        let mut rooms: Vec<Room> = [(2, 8), (14, 17), (28, 10)]
            .iter()
            .enumerate()
            .map(|(id, &(x, y))| Room::new(Coordinate::new(x, y), id, 6, 6))
            .collect();
        for room in &mut rooms {
            room.fill_floor(&mut grid, &mut rng);
        }

        let queue = build_candidates(&rooms, &mut rng).expect("rooms are filled");
        let corridors =
            select_spanning_corridors(rooms.len(), queue, &mut grid).expect("rooms connect");
        for room in &rooms {
            room.draw_walls(&mut grid);
        }
        for corridor in &corridors {
            corridor.draw_walls(&mut grid);
        }
        (grid, rooms, corridors)
    }

    // Verifies the avatar lands on the first room opening of an accepted corridor
    // Verified by using the second room of the corridor
    #[test]
    fn test_avatar_on_corridor_opening() {
        for seed in 0..10 {
            let (mut grid, rooms, corridors) = layout(seed);
            let mut rng = StdRng::seed_from_u64(seed);

            let start = place_avatar(&mut grid, &rooms, &corridors, &mut rng)
                .expect("corridors exist");

            assert!(corridors.iter().any(|corridor| {
                rooms[corridor.room_one()].opening_point() == Some(start)
            }));
            assert_eq!(grid.get(start), Some(Tile::Avatar));
            assert_eq!(grid.count(Tile::Avatar), 1);
        }
    }

    // Tests no avatar can be placed without corridors
    // Verified by defaulting to the first room opening
    #[test]
    fn test_avatar_needs_corridor() {
        let (mut grid, rooms, _) = layout(0);
        let mut rng = StdRng::seed_from_u64(0);
        assert_eq!(place_avatar(&mut grid, &rooms, &[], &mut rng), None);
        assert_eq!(grid.count(Tile::Avatar), 0);
    }

    // Tests every opening except the start gets an obstacle
    // Verified by also overwriting the avatar's opening
    #[test]
    fn test_obstacles_on_other_openings() {
        let (mut grid, rooms, corridors) = layout(4);
        let mut rng = StdRng::seed_from_u64(4);
        let start = place_avatar(&mut grid, &rooms, &corridors, &mut rng).expect("corridors exist");

        let obstacles = place_obstacles(&mut grid, &rooms, start);

        assert_eq!(obstacles.len(), rooms.len() - 1);
        assert!(!obstacles.contains(&start));
        for obstacle in &obstacles {
            assert_eq!(grid.get(*obstacle), Some(Tile::Obstacle));
        }
        assert_eq!(grid.get(start), Some(Tile::Avatar));
    }

    // Tests exits are distinct room-interior cells that were plain floor
    // Verified by accepting picks on top of obstacles
    #[test]
    fn test_exits_on_free_floor() {
        for seed in 0..10 {
            let (mut grid, rooms, corridors) = layout(seed);
            let mut rng = StdRng::seed_from_u64(seed);
            let start =
                place_avatar(&mut grid, &rooms, &corridors, &mut rng).expect("corridors exist");
            let obstacles = place_obstacles(&mut grid, &rooms, start);

            let exits = place_exits(&mut grid, &rooms, 2, &mut rng).expect("rooms have space");

            assert_eq!(exits.len(), 2);
            assert_ne!(exits[0], exits[1]);
            assert_eq!(grid.count(Tile::UnlockedExit), 2);
            for exit in &exits {
                assert!(rooms.iter().any(|room| room.contains_interior(*exit)));
                assert_ne!(*exit, start);
                assert!(!obstacles.contains(exit));
            }
        }
    }

    // Tests exit placement gives up when no free floor remains
    // Verified by looping until the draw succeeds
    #[test]
    fn test_exits_without_space() {
        let mut grid = TileGrid::new(12, 6);
        let mut rng = StdRng::seed_from_u64(0);
        let mut room = Room::new(Coordinate::new(2, 4), 0, 3, 3);
        room.fill_floor(&mut grid, &mut rng);
        let opening = room.opening_point().expect("single interior cell");
        grid.set(opening, Tile::Obstacle);

        assert_eq!(place_exits(&mut grid, &[room], 1, &mut rng), None);
        assert_eq!(place_exits(&mut grid, &[], 1, &mut rng), None);
        assert_eq!(place_exits(&mut grid, &[], 0, &mut rng), Some(Vec::new()));
    }

    // Tests the full decoration pass is reproducible
    // Verified by drawing exits before the avatar
    #[test]
    fn test_decorate_deterministic() {
        let (mut first_grid, rooms, corridors) = layout(9);
        let mut second_grid = first_grid.clone();

        let first = decorate(
            &mut first_grid,
            &rooms,
            &corridors,
            2,
            &mut StdRng::seed_from_u64(1),
        );
        let second = decorate(
            &mut second_grid,
            &rooms,
            &corridors,
            2,
            &mut StdRng::seed_from_u64(1),
        );

        let decorations = first.expect("layout has space");
        assert_eq!(Some(decorations.clone()), second);
        assert_eq!(first_grid, second_grid);
        assert_eq!(decorations.obstacles.len(), 2);
        assert_eq!(decorations.exits.len(), 2);
    }
}
